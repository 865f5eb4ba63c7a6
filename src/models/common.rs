//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundingBox {
    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl BoundingBox {
    /// Pixel count, computed without overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Image with URL and dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Image size.
    pub bounding_box: BoundingBox,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(url: S, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            bounding_box: BoundingBox { width, height },
        }
    }
}

/// User avatar in the four sizes Genius serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Avatar {
    /// 16x16 thumbnail.
    pub tiny: Option<Image>,

    /// 32x32 thumbnail.
    pub thumb: Option<Image>,

    /// 100x100 image.
    pub small: Option<Image>,

    /// 300x400 image.
    pub medium: Option<Image>,
}

impl Avatar {
    /// Get the largest image available.
    pub fn largest(&self) -> Option<&Image> {
        [&self.medium, &self.small, &self.thumb, &self.tiny]
            .into_iter()
            .flatten()
            .max_by_key(|img| img.bounding_box.area())
    }
}

/// Page and annotation counters for a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Stats {
    /// Annotations accepted by editors.
    pub accepted_annotations: Option<u64>,

    /// Users who contributed to the page.
    pub contributors: Option<u64>,

    /// Whether the song is trending.
    pub hot: bool,

    /// Users who earned IQ on the page.
    pub iq_earners: Option<u64>,

    /// Users who transcribed lyrics.
    pub transcribers: Option<u64>,

    /// Annotations awaiting review.
    pub unreviewed_annotations: Option<u64>,

    /// Annotations verified by the artist.
    pub verified_annotations: Option<u64>,

    /// Users currently viewing the page.
    pub concurrents: Option<u64>,

    /// Total page views. Omitted for low-traffic pages.
    pub pageviews: Option<u64>,
}

/// External media link (YouTube, Spotify, SoundCloud...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Media {
    /// Provider name, e.g. `"youtube"`.
    pub provider: String,

    /// ID on the provider's side.
    pub provider_id: Option<String>,

    /// App URI such as `spotify:track:...`.
    pub native_uri: Option<String>,

    /// Offset in seconds where playback starts.
    pub start: Option<i64>,

    /// `"audio"` or `"video"`.
    #[serde(rename = "type")]
    pub type_: String,

    /// Web URL of the media.
    pub url: String,
}

/// Third-party identity linked to a user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Identity {
    /// Identity ID.
    pub id: u64,

    /// Name on the provider.
    pub name: Option<String>,

    /// Provider name, e.g. `"facebook"`.
    pub provider: String,

    /// Provider-specific data, passed through as is.
    pub custom_properties: Option<serde_json::Value>,
}

/// What the authenticated user may do with an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserMetadata {
    /// Granted permissions, e.g. `"vote"`.
    pub permissions: Vec<String>,

    /// Permissions withheld from the user.
    pub excluded_permissions: Vec<String>,

    /// Feature flags enabled for the user.
    pub features: Vec<String>,

    /// IQ the user would earn per moderation action.
    pub iq_by_action: Option<IqByAction>,

    /// The user's current interactions with the object.
    pub interactions: Interactions,

    /// The user's role on the object.
    pub relationships: Relationships,
}

/// Interactions of the authenticated user with an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Interactions {
    pub following: bool,
    pub cosign: bool,
    pub pyong: bool,

    /// `"up"`, `"down"` or `None`.
    pub vote: Option<String>,
}

/// Relationship of the authenticated user to an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Relationships {
    pub pinned_role: Option<String>,
}

/// IQ awarded per moderation action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IqByAction {
    pub accept: Option<ActionIq>,
    pub reject: Option<ActionIq>,
    pub delete: Option<ActionIq>,
    pub edit_metadata: Option<ActionIq>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionIq {
    pub primary: Option<Primary>,
}

/// IQ rule for one action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Primary {
    /// Factor applied to `base`.
    pub multiplier: f64,

    /// Base IQ for the action.
    pub base: f64,

    /// Whether the rule applies to this user.
    pub applicable: bool,
}

/// Fact-track (Spotify "behind the lyrics") block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FactTrack {
    pub provider: String,
    pub external_url: String,
    pub button_text: String,
    pub help_link_text: String,
    pub help_link_url: String,
}

/// A web page annotated on Genius.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebPage {
    /// API path, e.g. `/web_pages/10347`.
    pub api_path: String,

    /// Host the page lives on.
    pub domain: String,

    /// Genius web page ID.
    pub id: u64,

    /// URL as normalized by Genius.
    pub normalized_url: String,

    /// Short link to the annotated page.
    pub share_url: String,

    /// Page title, when Genius could read it.
    pub title: Option<String>,

    /// Original URL.
    pub url: String,

    /// Annotations on the page.
    pub annotation_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_avatar_largest() {
        let avatar = Avatar {
            tiny: Some(Image::new("tiny.png", 16, 16)),
            medium: Some(Image::new("medium.png", 300, 400)),
            ..Default::default()
        };
        assert_eq!(avatar.largest().unwrap().url, "medium.png");
        assert!(Avatar::default().largest().is_none());
    }

    #[test]
    fn test_avatar_largest_huge_dimensions() {
        let avatar = Avatar {
            small: Some(Image::new("small.png", 100, 100)),
            medium: Some(Image::new("medium.png", 70000, 70000)),
            ..Default::default()
        };
        assert_eq!(avatar.largest().unwrap().url, "medium.png");
        assert_eq!(
            Image::new("max", u32::MAX, u32::MAX).bounding_box.area(),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_user_metadata_decode() {
        let meta: UserMetadata = serde_json::from_value(json!({
            "permissions": ["vote", "create_comment"],
            "excluded_permissions": ["edit"],
            "interactions": {"following": true, "vote": null},
            "iq_by_action": {"accept": {"primary": {"multiplier": 1, "base": 4, "applicable": true}}}
        }))
        .unwrap();

        assert_eq!(meta.permissions, vec!["vote", "create_comment"]);
        assert_eq!(meta.excluded_permissions, vec!["edit"]);
        assert!(meta.interactions.following);
        assert_eq!(meta.interactions.vote, None);

        let primary = meta.iq_by_action.unwrap().accept.unwrap().primary.unwrap();
        assert_eq!(primary.base, 4.0);
        assert!(primary.applicable);
    }
}
