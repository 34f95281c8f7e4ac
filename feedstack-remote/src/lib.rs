//! HTTP client for the FeedStack feed API.
//!
//! Wraps the upstream JSON API behind a typed client. The two endpoints
//! the core reads are `GET /posts` (the whole feed) and `GET /posts/{id}`
//! (a single post). Transport, status, and decode failures map to
//! distinct [`RemoteError`] variants; raw reqwest errors never leave this
//! crate.

mod client;
mod error;

pub use client::{ApiClient, RemoteConfig};
pub use error::{RemoteError, RemoteResult};
