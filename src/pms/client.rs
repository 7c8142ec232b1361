//! PMS Client
//!
//! Main client for the policy management service, combining the configured
//! endpoint with the HTTP transport.

use super::http::{HttpOptions, PmsHttpClient};
use crate::resource::ResourceGetter;
use anyhow::{Context, Result};
use url::Url;

/// Default PMS REST endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:6733/policy-mgmt/v1/";

/// Main PMS client
#[derive(Clone)]
pub struct PmsClient {
    pub endpoint: Url,
    pub http: PmsHttpClient,
}

impl PmsClient {
    /// Create a new PMS client for `endpoint`
    pub fn new(endpoint: &str, options: &HttpOptions) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid PMS endpoint: {}", endpoint))?;
        if endpoint.cannot_be_a_base() {
            return Err(anyhow::anyhow!("Invalid PMS endpoint: {}", endpoint));
        }

        let http = PmsHttpClient::new(options)?;

        Ok(Self { endpoint, http })
    }

    /// Build the URL for a resource path, percent-encoding each segment
    pub fn resource_url(&self, segments: &[String]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Invalid PMS endpoint: {}", self.endpoint))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request against a resource path
    pub async fn get(
        &self,
        segments: &[String],
        query: Option<&[(String, String)]>,
        token: &str,
    ) -> Result<Vec<u8>> {
        let url = self.resource_url(segments)?;
        self.http.get(url.as_str(), query, token).await
    }
}

impl ResourceGetter for PmsClient {
    async fn get_resource(&self, segments: &[String]) -> Result<Vec<u8>> {
        self.get(segments, None, "").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resource_url_appends_segments() {
        let client = PmsClient::new(DEFAULT_ENDPOINT, &HttpOptions::default()).unwrap();
        let url = client
            .resource_url(&segments(&["service", "svcA", "policy", "p1"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:6733/policy-mgmt/v1/service/svcA/policy/p1"
        );
    }

    #[test]
    fn test_resource_url_without_trailing_slash() {
        let client =
            PmsClient::new("http://pms.local:6733/policy-mgmt/v1", &HttpOptions::default())
                .unwrap();
        let url = client.resource_url(&segments(&["function"])).unwrap();
        assert_eq!(url.as_str(), "http://pms.local:6733/policy-mgmt/v1/function");
    }

    #[test]
    fn test_resource_url_encodes_names() {
        let client = PmsClient::new(DEFAULT_ENDPOINT, &HttpOptions::default()).unwrap();
        let url = client
            .resource_url(&segments(&["service", "a b/c"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:6733/policy-mgmt/v1/service/a%20b%2Fc"
        );
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        assert!(PmsClient::new("not a url", &HttpOptions::default()).is_err());
        assert!(PmsClient::new("mailto:ops@example.com", &HttpOptions::default()).is_err());
    }
}
