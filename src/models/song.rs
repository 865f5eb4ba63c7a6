//! Song-related models.

use serde::{Deserialize, Serialize};

use super::annotation::DescriptionAnnotation;
use super::artist::Artist;
use super::common::{FactTrack, Media, Stats, UserMetadata};
use super::text::{self, RawText, TextFormat, WithTextFormat};
use super::user::User;
use crate::error::Result;

/// A song on Genius.
///
/// Songs returned by `/artists/{id}/songs` and `/search` only carry the
/// summary fields; `/songs/{id}` fills the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Song {
    /// Description flattened for a `plain` or `html` request.
    #[serde(skip)]
    pub description: Option<String>,

    /// Description as received, keyed by format.
    #[serde(rename = "description")]
    pub raw_description: Option<RawText>,

    /// Annotations on the song page.
    pub annotation_count: u64,

    /// API path, e.g. `/songs/378195`.
    pub api_path: String,

    pub apple_music_id: Option<String>,

    /// HTML snippet embedding the lyrics.
    pub embed_content: Option<String>,

    pub fact_track: Option<FactTrack>,
    pub featured_video: bool,

    /// Title with artist, e.g. "Sorry by Justin Bieber".
    pub full_title: String,

    pub header_image_thumbnail_url: Option<String>,
    pub header_image_url: Option<String>,

    /// Genius song ID.
    pub id: u64,

    /// User ID of the lyrics transcriber.
    pub lyrics_owner_id: Option<u64>,

    /// `"complete"`, `"incomplete"` or `"unreleased"`.
    pub lyrics_state: String,

    /// Relative web path.
    pub path: String,

    pub pyongs_count: Option<u64>,
    pub recording_location: Option<String>,

    /// Release date as `YYYY-MM-DD`.
    pub release_date: Option<String>,

    /// Release date formatted for display, e.g. "November 13, 2015".
    pub release_date_for_display: Option<String>,

    pub song_art_image_thumbnail_url: Option<String>,

    /// Cover art URL.
    pub song_art_image_url: Option<String>,

    pub stats: Option<Stats>,

    /// Song title.
    pub title: String,

    /// Title including featured artists.
    pub title_with_featured: String,

    /// Web URL of the song page.
    pub url: String,

    /// What the token's user may do with the song.
    pub current_user_metadata: Option<UserMetadata>,

    pub album: Option<Album>,

    /// Extra credits ("Mixed By", "Label"...).
    pub custom_performances: Vec<CustomPerformance>,

    /// Annotation attached to the song description.
    pub description_annotation: Option<DescriptionAnnotation>,

    pub featured_artists: Vec<Artist>,

    /// Streaming and video links.
    pub media: Vec<Media>,

    /// Main artist.
    pub primary_artist: Option<Artist>,

    pub producer_artists: Vec<Artist>,

    /// Samples, covers, remixes...
    pub song_relationships: Vec<SongRelationship>,

    pub verified_annotations_by: Vec<User>,
    pub verified_contributors: Vec<Contributor>,
    pub verified_lyrics_by: Vec<User>,
    pub writer_artists: Vec<Artist>,
}

impl Song {
    /// Flat description, if one was derived.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Name of the primary artist, or an empty string.
    pub fn artist_name(&self) -> &str {
        self.primary_artist
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("")
    }

    /// Get all artist names as a single string, primary artist first.
    pub fn artists_string(&self, separator: &str) -> String {
        self.primary_artist
            .iter()
            .chain(self.featured_artists.iter())
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl WithTextFormat for Song {
    fn with_text_format(mut self, format: TextFormat) -> Result<Self> {
        if format.is_structured() {
            return Ok(self);
        }
        self.description = text::flatten(self.raw_description.as_ref(), format)?;
        Ok(self)
    }
}

/// Album a song belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Album {
    /// API path, e.g. `/albums/104614`.
    pub api_path: String,

    /// Cover image URL.
    pub cover_art_url: Option<String>,

    /// Name with artist.
    pub full_title: String,

    /// Genius album ID.
    pub id: u64,

    /// Album name.
    pub name: String,

    /// Web URL of the album page.
    pub url: String,

    /// Album artist.
    pub artist: Option<Artist>,
}

/// Credit line such as "Mixed By" or "Recorded At".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CustomPerformance {
    /// Credit label, e.g. "Mixed By".
    pub label: String,
    pub artists: Vec<Artist>,
}

/// User or artist credited with verified contributions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contributor {
    /// Kinds of contribution, e.g. `"annotations"`.
    pub contributions: Vec<String>,
    pub artist: Option<Artist>,
    pub user: Option<User>,
}

/// Samples, covers, remixes and similar links between songs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SongRelationship {
    /// Relationship kind, e.g. `"samples"` or `"covered_by"`.
    #[serde(rename = "relationship_type", alias = "type")]
    pub type_: String,

    /// Related songs, summary fields only.
    pub songs: Vec<Song>,
}

/// Sort order for an artist's songs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SongSort {
    /// Alphabetical by title.
    #[default]
    Title,
    /// Most viewed first.
    Popularity,
}

impl SongSort {
    /// Get the query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SongSort::Title => "title",
            SongSort::Popularity => "popularity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_song_summary_fields() {
        let song: Song = serde_json::from_value(json!({
            "id": 378195,
            "title": "Sorry",
            "full_title": "Sorry by Justin Bieber",
            "release_date": null,
            "primary_artist": {"id": 357, "name": "Justin Bieber"},
            "featured_artists": [{"id": 1, "name": "Guest"}],
            "media": [
                {"provider": "youtube", "type": "video", "url": "https://youtu.be/x", "start": 0},
                {"provider": "spotify", "type": "audio", "url": "https://open.spotify.com/x"}
            ],
            "stats": {"hot": true, "pageviews": 1000}
        }))
        .unwrap();

        assert_eq!(song.artist_name(), "Justin Bieber");
        assert_eq!(song.artists_string(", "), "Justin Bieber, Guest");
        assert_eq!(song.media.len(), 2);
        assert_eq!(song.media[1].provider, "spotify");
        assert_eq!(song.media[1].type_, "audio");
        assert_eq!(song.stats.unwrap().pageviews, Some(1000));
        assert_eq!(song.release_date, None);
    }

    #[test]
    fn test_song_html_description() {
        let song: Song = serde_json::from_value(json!({
            "description": {"html": "<p>About</p>"},
            "song_relationships": [{"relationship_type": "samples", "songs": []}]
        }))
        .unwrap();

        let song = song.with_text_format(TextFormat::Html).unwrap();
        assert_eq!(song.description_text(), Some("<p>About</p>"));
        assert_eq!(song.song_relationships[0].type_, "samples");
    }

    #[test]
    fn test_song_sort_values() {
        assert_eq!(SongSort::Title.as_str(), "title");
        assert_eq!(SongSort::Popularity.as_str(), "popularity");
    }
}
