//! Response envelope and per-endpoint payloads.
//!
//! Every Genius response is `{"meta": {...}, "response": {...}}`. The
//! envelope is decoded in two steps: `meta` first, then `response` into the
//! payload type of the endpoint that was called.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::annotation::Annotation;
use super::artist::Artist;
use super::common::WebPage;
use super::search::Hit;
use super::song::Song;
use super::user::User;
use crate::error::{GeniusError, Result};

/// Status reported inside the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Meta {
    /// Status code mirrored from HTTP, or the real error code.
    pub status: u16,

    /// Error message when `status` is not 200.
    pub message: Option<String>,
}

impl Meta {
    /// Whether `status` is 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Envelope with the payload still undecoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub meta: Meta,

    /// Payload, decoded by [`Envelope::into_payload`].
    #[serde(default)]
    pub response: Value,
}

impl Envelope {
    /// Parse a response body.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check `meta` and decode the payload.
    ///
    /// A non-200 `meta.status` yields [`GeniusError::Api`] carrying the
    /// embedded message; the payload is not looked at.
    pub fn into_payload<P: DeserializeOwned>(self) -> Result<P> {
        if !self.meta.is_ok() {
            return Err(GeniusError::Api(self.meta.message.unwrap_or_default()));
        }
        Ok(serde_json::from_value(self.response)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistPayload {
    pub artist: Artist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongPayload {
    pub song: Song,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationPayload {
    pub annotation: Annotation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPayload {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebPagePayload {
    pub web_page: WebPage,
}

/// One page of an artist's songs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongsPage {
    /// Songs on this page, summary fields only.
    pub songs: Vec<Song>,

    /// Page number to request next; `None` on the last page.
    #[serde(default)]
    pub next_page: Option<u32>,
}
