//! Genius API client.
//!
//! This module provides a client for the Genius API (api.genius.com).
//! Every request is authenticated with a bearer access token.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::error::{GeniusError, Result};
use crate::models::envelope::{
    AnnotationPayload, ArtistPayload, Envelope, SearchPayload, SongPayload, SongsPage,
    UserPayload, WebPagePayload,
};
use crate::models::{
    Annotation, Artist, Hit, Song, SongSort, TextFormat, User, WebPage, WithTextFormat,
};

/// Base URL for the Genius API.
const API_BASE_URL: &str = "https://api.genius.com";

/// Genius API client.
///
/// Cloning is cheap; clones share the transport.
///
/// # Example
///
/// ```rust,no_run
/// use genius::GeniusApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = GeniusApi::new("your_access_token");
///     let artist = api.get_artist_html(16775).await?;
///     println!("{}: {}", artist.name, artist.description_text().unwrap_or(""));
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct GeniusApi {
    transport: Arc<dyn HttpTransport>,
    access_token: String,
    base_url: String,
}

impl fmt::Debug for GeniusApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeniusApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// URLs identifying a web page for [`GeniusApi::get_web_page`].
///
/// At least one should be set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPageLookup {
    pub raw_annotatable_url: Option<String>,
    pub canonical_url: Option<String>,
    pub og_url: Option<String>,
}

impl WebPageLookup {
    /// Look up by the page's own URL.
    pub fn url<S: Into<String>>(url: S) -> Self {
        Self {
            raw_annotatable_url: Some(url.into()),
            ..Default::default()
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        [
            ("raw_annotatable_url", &self.raw_annotatable_url),
            ("canonical_url", &self.canonical_url),
            ("og_url", &self.og_url),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
        .collect()
    }
}

impl GeniusApi {
    /// Create a client using the default `reqwest` transport.
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()), access_token)
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport<S: Into<String>>(
        transport: Arc<dyn HttpTransport>,
        access_token: S,
    ) -> Self {
        Self {
            transport,
            access_token: access_token.into(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint (mock servers, proxies).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an authenticated GET and return the body of a 200 response.
    ///
    /// Any other status fails with the raw body; the body's own `meta` is
    /// not consulted here.
    async fn do_request(&self, path: &str, query: Vec<(&'static str, String)>) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} with params: {:?}", url, query);

        let request = HttpRequest {
            url,
            query,
            headers: vec![
                ("Authorization", format!("Bearer {}", self.access_token)),
                ("Content-Type", "application/json".to_string()),
            ],
        };

        let response = self.transport.get(request).await?;
        debug!("{} answered with status {}", path, response.status);

        if response.status != 200 {
            return Err(GeniusError::Http {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }

    /// Request `path` and decode the envelope's payload.
    async fn get_payload<P: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<P> {
        let body = self.do_request(path, query).await?;
        Envelope::parse(&body)?.into_payload()
    }

    /// Get the account of the token's owner.
    pub async fn get_account(&self) -> Result<User> {
        let payload: UserPayload = self.get_payload("/account/", Vec::new()).await?;
        Ok(payload.user)
    }

    /// Get an artist by ID, with the description in `dom` format.
    pub async fn get_artist(&self, artist_id: u64) -> Result<Artist> {
        self.get_artist_dom(artist_id).await
    }

    /// Get an artist by ID, with the description in `dom` format.
    pub async fn get_artist_dom(&self, artist_id: u64) -> Result<Artist> {
        self.get_artist_with_format(artist_id, TextFormat::Dom).await
    }

    /// Get an artist by ID, with a plain-text description.
    pub async fn get_artist_plain(&self, artist_id: u64) -> Result<Artist> {
        self.get_artist_with_format(artist_id, TextFormat::Plain).await
    }

    /// Get an artist by ID, with an HTML description.
    pub async fn get_artist_html(&self, artist_id: u64) -> Result<Artist> {
        self.get_artist_with_format(artist_id, TextFormat::Html).await
    }

    /// Get an artist by ID in the given text format.
    pub async fn get_artist_with_format(
        &self,
        artist_id: u64,
        text_format: TextFormat,
    ) -> Result<Artist> {
        let payload: ArtistPayload = self
            .get_payload(
                &format!("/artists/{}", artist_id),
                vec![("text_format", text_format.as_str().to_string())],
            )
            .await?;
        payload.artist.with_text_format(text_format)
    }

    /// Get a page of an artist's songs.
    pub async fn get_artist_songs(
        &self,
        artist_id: u64,
        sort: SongSort,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Song>> {
        Ok(self
            .get_artist_songs_page(artist_id, sort, per_page, page)
            .await?
            .songs)
    }

    /// Get a page of an artist's songs along with the next page number.
    pub async fn get_artist_songs_page(
        &self,
        artist_id: u64,
        sort: SongSort,
        per_page: u32,
        page: u32,
    ) -> Result<SongsPage> {
        self.get_payload(
            &format!("/artists/{}/songs", artist_id),
            vec![
                ("sort", sort.as_str().to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    /// Get a song by ID in the given text format.
    pub async fn get_song(&self, song_id: u64, text_format: TextFormat) -> Result<Song> {
        let payload: SongPayload = self
            .get_payload(
                &format!("/songs/{}", song_id),
                vec![("text_format", text_format.as_str().to_string())],
            )
            .await?;
        payload.song.with_text_format(text_format)
    }

    /// Get an annotation by ID in the given text format.
    pub async fn get_annotation(
        &self,
        annotation_id: u64,
        text_format: TextFormat,
    ) -> Result<Annotation> {
        let payload: AnnotationPayload = self
            .get_payload(
                &format!("/annotations/{}", annotation_id),
                vec![("text_format", text_format.as_str().to_string())],
            )
            .await?;
        payload.annotation.with_text_format(text_format)
    }

    /// Search Genius. Only songs are returned.
    pub async fn search(&self, query: &str) -> Result<Vec<Hit>> {
        let payload: SearchPayload = self
            .get_payload("/search", vec![("q", query.to_string())])
            .await?;
        Ok(payload.hits)
    }

    /// Look up an annotated web page.
    pub async fn get_web_page(&self, lookup: &WebPageLookup) -> Result<WebPage> {
        let payload: WebPagePayload = self
            .get_payload("/web_pages/lookup", lookup.query())
            .await?;
        Ok(payload.web_page)
    }
}
