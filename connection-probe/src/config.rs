//! Probe configuration.
//!
//! Resolved once at startup from `MONGODB_URI` (process environment or a
//! `.env` file in the working directory), falling back to a local default.

use std::fmt;

/// Environment variable holding the connection string.
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

/// Target used when `MONGODB_URI` is not set.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/job-tracker";

/// Where the connection string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriSource {
    Environment,
    Default,
}

/// Probe configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Connection string handed to the driver. May carry credentials.
    pub connection_uri: String,
    /// Source of `connection_uri`.
    pub source: UriSource,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connection_uri: DEFAULT_MONGODB_URI.to_string(),
            source: UriSource::Default,
        }
    }
}

impl ProbeConfig {
    /// Loads `.env` (if present) and resolves the configuration from the
    /// process environment.
    pub fn load() -> Self {
        // .env 文件不存在时忽略
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup`. An empty value counts as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(MONGODB_URI_ENV).filter(|uri| !uri.is_empty()) {
            Some(connection_uri) => Self {
                connection_uri,
                source: UriSource::Environment,
            },
            None => Self::default(),
        }
    }

    /// Operator-facing description of the target. Never reveals a
    /// connection string taken from the environment.
    pub fn describe_target(&self) -> String {
        match self.source {
            UriSource::Environment => {
                format!("{MONGODB_URI_ENV} from environment (hidden for security)")
            }
            UriSource::Default => self.connection_uri.clone(),
        }
    }
}

impl fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("connection_uri", &self.describe_target())
            .field("source", &self.source)
            .finish()
    }
}
