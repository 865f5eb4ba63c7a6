//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::annotation::DescriptionAnnotation;
use super::common::UserMetadata;
use super::text::{self, RawText, TextFormat, WithTextFormat};
use super::user::User;
use crate::error::Result;

/// An artist on Genius.
///
/// Nested artists (a song's `primary_artist`, an album's `artist`) only carry
/// the summary fields; `/artists/{id}` fills the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Artist {
    /// Description flattened for a `plain` or `html` request.
    #[serde(skip)]
    pub description: Option<String>,

    /// Description as received, keyed by format.
    #[serde(rename = "description")]
    pub raw_description: Option<RawText>,

    /// Other names the artist is known by.
    pub alternate_names: Vec<String>,

    /// API path, e.g. `/artists/16775`.
    pub api_path: String,

    pub facebook_name: Option<String>,

    /// Number of Genius users following the artist.
    pub followers_count: u64,

    /// Banner image URL.
    pub header_image_url: Option<String>,

    /// Genius artist ID.
    pub id: u64,

    /// Profile image URL.
    pub image_url: Option<String>,

    pub instagram_name: Option<String>,

    /// Verified for "Verified" meme annotations.
    pub is_meme_verified: bool,

    /// Verified artist account.
    pub is_verified: bool,

    /// Artist name.
    pub name: String,

    /// Whether this is a "Genius Translations" pseudo-artist.
    pub translation_artist: bool,

    pub twitter_name: Option<String>,

    /// Artist page on genius.com.
    pub url: String,

    /// Permissions of the token owner on this artist.
    pub current_user_metadata: Option<UserMetadata>,

    /// IQ of the linked user account, if any.
    pub iq: Option<i64>,

    /// Referent holding the community description.
    pub description_annotation: Option<DescriptionAnnotation>,

    /// Genius account of the artist.
    pub user: Option<User>,
}

impl Artist {
    /// Create a new artist with name and ID.
    pub fn new<S: Into<String>>(name: S, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
            api_path: format!("/artists/{}", id),
            ..Default::default()
        }
    }

    /// Flat description, if one was derived.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Social handles that are set, as `(network, handle)` pairs.
    pub fn social_handles(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", &self.facebook_name),
            ("instagram", &self.instagram_name),
            ("twitter", &self.twitter_name),
        ]
        .into_iter()
        .filter_map(|(network, handle)| {
            handle
                .as_deref()
                .filter(|h| !h.is_empty())
                .map(|h| (network, h))
        })
        .collect()
    }
}

impl WithTextFormat for Artist {
    fn with_text_format(mut self, format: TextFormat) -> Result<Self> {
        if format.is_structured() {
            return Ok(self);
        }
        self.description = text::flatten(self.raw_description.as_ref(), format)?;
        Ok(self)
    }
}
