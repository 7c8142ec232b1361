//! Command-line surface
//!
//! Flags are parsed here and threaded explicitly into the request and the
//! client; nothing below this layer reads process-wide state.

use crate::error::{GetError, GetResult};
use crate::resource::{FetchRequest, ResourceKind};
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

const GET_EXAMPLES: &str = "\
Examples:
  # List all services
  spctl get service --all

  # Get service \"foo\"
  spctl get service foo

  # List all policies in service \"foo\"
  spctl get policy --all --service-name=foo

  # Get the policy with id \"1\" in service \"foo\"
  spctl get policy 1 --service-name=foo

  # List all functions
  spctl get function --all

  # Get function \"foo\"
  spctl get function foo";

/// Command-line client for the policy management service
#[derive(Parser, Debug)]
#[command(name = "spctl", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection and diagnostics flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// PMS REST endpoint, e.g. http://127.0.0.1:6733/policy-mgmt/v1/
    #[arg(long, global = true)]
    pub pms_endpoint: Option<String>,

    /// PEM file with extra CA certificates to trust
    #[arg(long, global = true)]
    pub cacert: Option<PathBuf>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (0 disables)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get one or many services | policies | role-policies | functions
    #[command(after_help = GET_EXAMPLES)]
    Get(GetArgs),
}

/// `get (service | policy | rolepolicy | function) (--all | NAME | ID...) [--service-name=NAME]`
#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// Resource type: service, policy, rolepolicy or function
    #[arg(value_name = "TYPE")]
    pub kind: Option<String>,

    /// Names (or ids) of the items to get
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Get all elements
    #[arg(short, long)]
    pub all: bool,

    /// Service owning the policies or role policies
    #[arg(long)]
    pub service_name: Option<String>,
}

impl GetArgs {
    /// Resolve the keyword and build the request
    pub fn to_request(&self) -> GetResult<FetchRequest> {
        let Some(keyword) = self.kind.as_deref() else {
            return Err(GetError::invalid("a resource type is required"));
        };
        let kind = ResourceKind::resolve(keyword)?;
        let request = FetchRequest::new(
            kind,
            self.service_name.clone(),
            self.names.clone(),
            self.all,
        );
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Whether a clap error is a rejected command line rather than a help or
/// version request. Rejected command lines exit 1 like a failed `get`.
pub fn is_usage_error(err: &clap::Error) -> bool {
    !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
