//! PMS API interaction module
//!
//! Everything needed to talk to the policy management service over REST.
//!
//! # Module Structure
//!
//! - [`client`] - Endpoint-aware client, the production `ResourceGetter`
//! - [`http`] - HTTP transport for REST API calls
//! - [`types`] - Payload shapes returned by the service
//!
//! # Example
//!
//! ```ignore
//! use crate::pms::client::{PmsClient, DEFAULT_ENDPOINT};
//! use crate::pms::http::HttpOptions;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = PmsClient::new(DEFAULT_ENDPOINT, &HttpOptions::default())?;
//!     let raw = client.get(&["service".to_string()], None, "").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
pub mod types;
