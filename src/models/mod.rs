//! Data models for Genius API responses.
//!
//! This module contains the data structures used to represent artists,
//! songs, annotations, users and search hits, plus the response envelope.

pub mod annotation;
pub mod artist;
pub mod common;
pub mod envelope;
pub mod search;
pub mod song;
pub mod text;
pub mod user;

// Re-exports for convenience
pub use annotation::{Annotatable, Annotation, Author, DescriptionAnnotation};
pub use artist::Artist;
pub use common::{Avatar, Identity, Image, Media, Stats, UserMetadata, WebPage};
pub use envelope::{Envelope, Meta, SongsPage};
pub use search::Hit;
pub use song::{Album, Contributor, Song, SongRelationship, SongSort};
pub use text::{TextFormat, WithTextFormat};
pub use user::User;
