//! spctl - command-line client for the policy management service (PMS)
//!
//! The `get` command resolves a resource keyword, fetches the collection or
//! the named items over REST and prints them as indented JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod pms;
pub mod resource;

use cli::{GetArgs, GlobalArgs};
use config::Config;
use error::{GetError, GetResult};
use pms::client::PmsClient;

/// Version injected at compile time via SPCTL_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("SPCTL_VERSION") {
    Some(v) => v,
    None => "dev",
};

/// Build a PMS client from global flags layered over the user config
pub fn connect(global: &GlobalArgs, config: &Config) -> anyhow::Result<PmsClient> {
    let endpoint = config.effective_endpoint(global.pms_endpoint.as_deref());
    let options = config.http_options(global.cacert.clone(), global.insecure, global.timeout);
    tracing::info!("Using PMS endpoint: {}", endpoint);
    PmsClient::new(&endpoint, &options)
}

/// Run `get`: validate arguments, connect, fetch and render.
///
/// Argument errors are reported before the client is built.
pub async fn run_get(args: &GetArgs, global: &GlobalArgs, config: &Config) -> GetResult<String> {
    let request = args.to_request()?;
    let client = connect(global, config).map_err(GetError::Client)?;
    resource::fetch_and_render(&request, &client).await
}
