//! API client for Genius.
//!
//! - [`GeniusApi`]: authenticated client, one method per endpoint
//! - [`transport`]: the HTTP seam the client is built on

pub mod client;
pub mod transport;

pub use client::{GeniusApi, WebPageLookup};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
