//! # Genius
//!
//! A Rust client for the [Genius](https://genius.com) music annotation API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genius::{GeniusApi, SongSort, TextFormat};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = GeniusApi::new("your_access_token");
//!
//!     // Artist with an HTML description
//!     let artist = api.get_artist_html(16775).await?;
//!     println!("{}", artist.description_text().unwrap_or_default());
//!
//!     // Their most popular songs
//!     let songs = api.get_artist_songs(16775, SongSort::Popularity, 10, 1).await?;
//!     for song in &songs {
//!         println!("{}", song.full_title);
//!     }
//!
//!     // Search
//!     let hits = api.search("A Change Is Gonna Come").await?;
//!     println!("{} hits", hits.len());
//!
//!     // Song with a plain-text description
//!     let song = api.get_song(hits[0].result.id, TextFormat::Plain).await?;
//!     println!("{}", song.title);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Text formats
//!
//! Descriptions and annotation bodies are requested in one of the
//! [`TextFormat`]s. With [`TextFormat::Dom`] the structured mapping in
//! `raw_description`/`raw_body` is authoritative; with `Plain` or `Html` the
//! flat string is also available through `description`/`body`.
//!
//! ## Custom transports
//!
//! [`GeniusApi::with_transport`] accepts any [`HttpTransport`], e.g. a
//! [`ReqwestTransport`] built from a `reqwest::Client` with timeouts.

pub mod api;
pub mod error;
pub mod models;

pub use api::{GeniusApi, HttpTransport, ReqwestTransport, WebPageLookup};
pub use error::GeniusError;
pub use models::{Annotation, Artist, Hit, Song, SongSort, SongsPage, TextFormat, User, WebPage};
