//! HTTP utilities for PMS REST API calls

use anyhow::{Context, Result};
use reqwest::{Certificate, Client};
use std::path::Path;
use std::time::Duration;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Maximum length of a server error message carried into the returned error
const MAX_ERROR_BODY_LENGTH: usize = 512;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = floor_char_boundary(body, MAX_LOG_BODY_LENGTH);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(char::is_control, "")
}

fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Pull a human readable message out of a PMS error body.
///
/// The service answers failures with `{"error": "..."}` or
/// `{"message": "..."}`; anything else is passed through trimmed.
pub(crate) fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("error").or_else(|| v.get("message")))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string());

    message
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_ERROR_BODY_LENGTH)
        .collect()
}

/// Transport options for the PMS HTTP client
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    /// PEM bundle of extra CA certificates to trust
    pub cacert: Option<std::path::PathBuf>,
    /// Skip TLS certificate verification
    pub insecure: bool,
    /// Whole-request timeout
    pub timeout: Option<Duration>,
}

/// HTTP client wrapper for PMS API calls
#[derive(Clone)]
pub struct PmsHttpClient {
    client: Client,
}

impl PmsHttpClient {
    /// Create a new HTTP client
    pub fn new(options: &HttpOptions) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("spctl/", env!("CARGO_PKG_VERSION")));

        if let Some(path) = options.cacert.as_deref() {
            builder = builder.add_root_certificate(load_certificate(path)?);
        }
        if options.insecure {
            tracing::warn!("TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Make a GET request and return the raw response body
    pub async fn get(
        &self,
        url: &str,
        query: Option<&[(String, String)]>,
        token: &str,
    ) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if !token.is_empty() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&text));
            let message = error_message(&text);
            if message.is_empty() {
                return Err(anyhow::anyhow!("API request failed: {}", status));
            }
            return Err(anyhow::anyhow!("API request failed: {}: {}", status, message));
        }

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body.to_vec())
    }
}

fn load_certificate(path: &Path) -> Result<Certificate> {
    let pem = std::fs::read(path)
        .with_context(|| format!("Failed to read CA certificate {}", path.display()))?;
    Certificate::from_pem(&pem)
        .with_context(|| format!("Invalid CA certificate {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let out = sanitize_for_log(&body);
        assert!(out.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(out.contains("500 bytes total"));
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_for_log("a\nb\tc"), "abc");
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = "é".repeat(150);
        let out = sanitize_for_log(&body);
        assert!(out.contains("[truncated"));
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error":"service svcA not found"}"#),
            "service svcA not found"
        );
        assert_eq!(error_message(r#"{"message":"boom"}"#), "boom");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("  not found\n"), "not found");
        assert_eq!(error_message(""), "");
    }
}
