//! Search result models.

use serde::{Deserialize, Serialize};

use super::song::Song;

/// A single `/search` hit. Only songs are returned by this endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hit {
    /// Matched fragments, passed through as is.
    pub highlights: Vec<serde_json::Value>,

    /// Search index the hit came from.
    pub index: String,

    /// Result kind, `"song"` for this endpoint.
    #[serde(rename = "type")]
    pub type_: String,

    /// Matched song, summary fields only.
    pub result: Song,
}

impl Hit {
    /// Whether this hit is a song.
    pub fn is_song(&self) -> bool {
        self.type_ == "song"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hit_decode() {
        let hit: Hit = serde_json::from_value(json!({
            "highlights": [],
            "index": "song",
            "type": "song",
            "result": {"id": 1, "title": "Token", "primary_artist": {"name": "Someone"}}
        }))
        .unwrap();

        assert!(hit.is_song());
        assert_eq!(hit.result.title, "Token");
        assert_eq!(hit.result.artist_name(), "Someone");
    }
}
