//! Annotation models.

use serde::{Deserialize, Serialize};

use super::common::UserMetadata;
use super::text::{self, RawText, TextFormat, WithTextFormat};
use super::user::User;
use crate::error::Result;

/// An annotation explaining a fragment of a song or web page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Annotation {
    /// Body flattened for a `plain` or `html` request.
    #[serde(skip)]
    pub body: Option<String>,

    /// Body as received, keyed by format.
    #[serde(rename = "body")]
    pub raw_body: Option<RawText>,

    /// API path, e.g. `/annotations/10225840`.
    pub api_path: String,

    pub comment_count: u64,

    /// Written by the community rather than the artist.
    pub community: bool,

    pub custom_preview: Option<String>,
    pub has_voters: bool,

    /// Genius annotation ID.
    pub id: u64,

    /// Pinned to the top of the referent.
    pub pinned: bool,

    /// Short link to the annotation.
    pub share_url: String,

    /// External source, passed through as is.
    pub source: Option<serde_json::Value>,

    /// `"accepted"`, `"pending"`, `"rejected"`...
    pub state: String,

    /// Web URL of the annotation.
    pub url: String,

    /// Verified by the artist.
    pub verified: bool,

    /// Upvotes minus downvotes.
    pub votes_total: i64,

    /// What the token's user may do with the annotation.
    pub current_user_metadata: Option<UserMetadata>,

    pub authors: Vec<Author>,

    /// Users who cosigned the annotation.
    pub cosigned_by: Vec<User>,

    pub verified_by: Option<User>,
}

impl Annotation {
    /// Flat body, if one was derived.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Author with the largest attribution share.
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors
            .iter()
            .max_by(|a, b| a.attribution.total_cmp(&b.attribution))
    }
}

impl WithTextFormat for Annotation {
    fn with_text_format(mut self, format: TextFormat) -> Result<Self> {
        if format.is_structured() {
            return Ok(self);
        }
        self.body = text::flatten(self.raw_body.as_ref(), format)?;
        Ok(self)
    }
}

/// A contributor to an annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Author {
    /// Share of the annotation attributed to this user, in `0.0..=1.0`.
    pub attribution: f64,

    /// Role pinned on the author, e.g. `"verified_artist"`.
    pub pinned_role: Option<String>,

    pub user: Option<User>,
}

/// Referent holding an artist's or song's description annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DescriptionAnnotation {
    /// Always `"referent"`.
    #[serde(rename = "_type")]
    pub type_: String,

    pub annotator_id: u64,
    pub annotator_login: String,
    pub api_path: String,

    /// `"accepted"`, `"unreviewed"`...
    pub classification: String,

    /// Annotated text.
    pub fragment: String,

    /// Genius referent ID.
    pub id: u64,

    pub is_description: bool,
    pub path: String,
    pub range: Range,

    /// Song the referent belongs to, if any.
    pub song_id: Option<u64>,

    pub url: String,
    pub verified_annotator_ids: Vec<u64>,

    /// Object the referent is attached to.
    pub annotatable: Option<Annotatable>,

    /// Annotations explaining the fragment.
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Range {
    /// Text the referent covers.
    pub content: String,
}

/// The object a referent is attached to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Annotatable {
    pub api_path: String,
    pub client_timestamps: ClientTimestamps,

    /// Usually the artist name for songs.
    pub context: Option<String>,

    pub id: u64,
    pub image_url: Option<String>,

    /// Title used in links.
    pub link_title: String,

    pub title: String,

    /// `"Artist"`, `"Song"` or `"WebPage"`.
    #[serde(rename = "type")]
    pub type_: String,

    pub url: String,
}

/// Unix timestamps of the last edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientTimestamps {
    pub updated_by_human_at: Option<i64>,
    pub lyrics_updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_annotation_plain_body() {
        let annotation: Annotation = serde_json::from_value(json!({
            "id": 10225840,
            "body": {"plain": "A reference to the river."},
            "votes_total": 12,
            "authors": [
                {"attribution": 0.25, "user": {"login": "a"}},
                {"attribution": 0.75, "user": {"login": "b"}}
            ]
        }))
        .unwrap();

        let annotation = annotation.with_text_format(TextFormat::Plain).unwrap();
        assert_eq!(annotation.body_text(), Some("A reference to the river."));
        assert_eq!(annotation.votes_total, 12);

        let author = annotation.primary_author().unwrap();
        assert_eq!(author.user.as_ref().unwrap().login, "b");
    }

    #[test]
    fn test_annotation_dom_body_kept_raw() {
        let annotation: Annotation = serde_json::from_value(json!({
            "body": {"dom": {"tag": "root", "children": ["text"]}}
        }))
        .unwrap();

        let annotation = annotation.with_text_format(TextFormat::Dom).unwrap();
        assert_eq!(annotation.body_text(), None);
        assert!(annotation.raw_body.unwrap().contains_key("dom"));
    }

    #[test]
    fn test_description_annotation_type_field() {
        let referent: DescriptionAnnotation = serde_json::from_value(json!({
            "_type": "referent",
            "fragment": "Sam Cooke",
            "range": {"content": "Sam Cooke"},
            "annotatable": {
                "type": "Artist",
                "client_timestamps": {"updated_by_human_at": 1500000000, "lyrics_updated_at": null}
            }
        }))
        .unwrap();

        assert_eq!(referent.type_, "referent");
        assert_eq!(referent.range.content, "Sam Cooke");
        let annotatable = referent.annotatable.unwrap();
        assert_eq!(annotatable.type_, "Artist");
        assert_eq!(
            annotatable.client_timestamps.updated_by_human_at,
            Some(1500000000)
        );
    }
}
