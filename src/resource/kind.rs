//! Resource kinds
//!
//! Maps the keyword typed on the command line to the resource kind, its
//! REST path and the payload shape it decodes into.

use crate::error::GetError;
use crate::pms::types::{Function, Policy, RolePolicy, Service};
use std::fmt;
use std::str::FromStr;

use super::render::{reformat, reformat_collection};

/// Keywords accepted on the command line, in help order
pub const KEYWORDS: &[&str] = &["service", "policy", "rolepolicy", "function"];

/// Kind of PMS resource a `get` addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Service,
    Policy,
    RolePolicy,
    Function,
}

impl ResourceKind {
    /// Resolve a command-line keyword, ignoring case
    pub fn resolve(keyword: &str) -> Result<Self, GetError> {
        match keyword.to_lowercase().as_str() {
            "service" => Ok(Self::Service),
            "policy" => Ok(Self::Policy),
            "rolepolicy" => Ok(Self::RolePolicy),
            "function" => Ok(Self::Function),
            _ => Err(GetError::invalid(format!(
                "unknown resource type '{}', expected one of: {}",
                keyword,
                KEYWORDS.join(", ")
            ))),
        }
    }

    /// Path keyword used by the REST API
    pub fn path_keyword(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Policy => "policy",
            Self::RolePolicy => "role-policy",
            Self::Function => "function",
        }
    }

    /// Whether a service name must be supplied to address this kind
    pub fn requires_scope(self) -> bool {
        matches!(self, Self::Policy | Self::RolePolicy)
    }

    /// Build the REST path for the collection (`name == None`) or one item.
    ///
    /// `scope` is only read for scoped kinds; an absent scope there yields an
    /// empty segment, callers validate presence first.
    pub fn build_path(self, scope: Option<&str>, name: Option<&str>) -> Vec<String> {
        let mut path = match self {
            Self::Service | Self::Function => vec![self.path_keyword().to_string()],
            Self::Policy | Self::RolePolicy => vec![
                "service".to_string(),
                scope.unwrap_or_default().to_string(),
                self.path_keyword().to_string(),
            ],
        };
        if let Some(name) = name {
            path.push(name.to_string());
        }
        path
    }

    /// Decode a collection body and pretty-print it
    pub fn render_collection(self, raw: &[u8]) -> Result<String, serde_json::Error> {
        match self {
            Self::Service => reformat_collection::<Service>(raw),
            Self::Policy => reformat_collection::<Policy>(raw),
            Self::RolePolicy => reformat_collection::<RolePolicy>(raw),
            Self::Function => reformat_collection::<Function>(raw),
        }
    }

    /// Decode a single item body and pretty-print it
    pub fn render_item(self, raw: &[u8]) -> Result<String, serde_json::Error> {
        match self {
            Self::Service => reformat::<Service>(raw),
            Self::Policy => reformat::<Policy>(raw),
            Self::RolePolicy => reformat::<RolePolicy>(raw),
            Self::Function => reformat::<Function>(raw),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = GetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_keyword())
    }
}
