//! Resource Fetcher
//!
//! Validates a `get` request and fetches either the whole collection or each
//! named item in turn.

use super::kind::ResourceKind;
use super::render;
use crate::error::{GetError, GetResult};
use anyhow::Result;
use std::future::Future;

/// Source of raw resource bodies, addressed by REST path segments
pub trait ResourceGetter {
    fn get_resource(&self, segments: &[String]) -> impl Future<Output = Result<Vec<u8>>>;
}

/// A validated-on-dispatch `get` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: ResourceKind,
    /// Service name for scoped kinds
    pub scope: Option<String>,
    pub names: Vec<String>,
    pub fetch_all: bool,
}

impl FetchRequest {
    pub fn new(
        kind: ResourceKind,
        scope: Option<String>,
        names: Vec<String>,
        fetch_all: bool,
    ) -> Self {
        Self {
            kind,
            scope: scope.filter(|s| !s.is_empty()),
            names,
            fetch_all,
        }
    }

    /// Collection request
    pub fn all(kind: ResourceKind, scope: Option<String>) -> Self {
        Self::new(kind, scope, Vec::new(), true)
    }

    /// Request for specific items, fetched in the given order
    pub fn named(kind: ResourceKind, scope: Option<String>, names: Vec<String>) -> Self {
        Self::new(kind, scope, names, false)
    }

    /// Check the request before any network call
    pub fn validate(&self) -> GetResult<()> {
        if self.kind.requires_scope() && self.scope.as_deref().map_or(true, str::is_empty) {
            return Err(GetError::invalid(format!(
                "--service-name is required to get {}",
                self.kind
            )));
        }
        if !self.fetch_all && self.names.is_empty() {
            return Err(GetError::invalid(format!(
                "specify --all or at least one {} name",
                self.kind
            )));
        }
        Ok(())
    }
}

/// Raw bodies gathered for a request, in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Body of the collection path
    Collection(Vec<u8>),
    /// `(name, body)` for each requested item
    Items(Vec<(String, Vec<u8>)>),
}

/// Fetch the raw bodies for `request`.
///
/// `fetch_all` wins over explicit names. Item fetches run one at a time in
/// request order and stop at the first failure, discarding what was
/// already gathered.
pub async fn dispatch<G: ResourceGetter>(
    request: &FetchRequest,
    getter: &G,
) -> GetResult<FetchResult> {
    request.validate()?;

    let kind = request.kind;
    let scope = request.scope.as_deref();

    if request.fetch_all {
        let path = kind.build_path(scope, None);
        tracing::debug!("fetching {} collection: {:?}", kind, path);
        let raw = getter.get_resource(&path).await.map_err(GetError::Fetch)?;
        return Ok(FetchResult::Collection(raw));
    }

    let mut items = Vec::with_capacity(request.names.len());
    for name in &request.names {
        let path = kind.build_path(scope, Some(name));
        tracing::debug!("fetching {} '{}': {:?}", kind, name, path);
        match getter.get_resource(&path).await {
            Ok(raw) => items.push((name.clone(), raw)),
            Err(e) => {
                tracing::debug!(
                    "fetch of {} '{}' failed, dropping {} fetched item(s)",
                    kind,
                    name,
                    items.len()
                );
                return Err(GetError::Fetch(e));
            }
        }
    }

    Ok(FetchResult::Items(items))
}

/// Fetch and render `request` as the text written to stdout
pub async fn fetch_and_render<G: ResourceGetter>(
    request: &FetchRequest,
    getter: &G,
) -> GetResult<String> {
    let result = dispatch(request, getter).await?;
    Ok(render::render(request.kind, &result))
}
