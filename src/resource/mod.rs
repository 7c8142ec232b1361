//! Resource abstraction layer
//!
//! Turns a `get` request into REST calls against the PMS and the fetched
//! bodies into display text.
//!
//! # Architecture
//!
//! - [`kind`] - Resolves command-line keywords and builds REST paths
//! - [`fetcher`] - Validates requests and fetches collections or named items
//! - [`render`] - Decodes bodies into their typed shape and pretty-prints them
//!
//! # Example
//!
//! ```ignore
//! use crate::resource::{fetch_and_render, FetchRequest, ResourceKind};
//!
//! async fn list_policies(client: &PmsClient) -> Result<String, GetError> {
//!     let request = FetchRequest::all(ResourceKind::Policy, Some("svcA".into()));
//!     fetch_and_render(&request, client).await
//! }
//! ```

mod fetcher;
mod kind;
pub mod render;

pub use fetcher::{dispatch, fetch_and_render, FetchRequest, FetchResult, ResourceGetter};
pub use kind::{ResourceKind, KEYWORDS};
