//! Connection report models.

use std::fmt;

/// Whether the connection was usable when inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Connected,
    Disconnected,
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadyState::Connected => write!(f, "Connected"),
            ReadyState::Disconnected => write!(f, "Disconnected"),
        }
    }
}

/// Snapshot taken from one successful connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    /// Server address the client was pointed at.
    pub host: String,
    /// Resolved database name.
    pub database: String,
    /// State reported by the server at connect time.
    pub state: ReadyState,
    /// Collection names in server order.
    pub collections: Vec<String>,
}
