//! Connector and session seam between the probe service and the driver.

use async_trait::async_trait;

use crate::error::ProbeResult;
use crate::models::ReadyState;

/// Opens a single session against a connection string.
#[async_trait]
pub trait Connector: Send + Sync {
    type Session: ProbeSession;

    /// Connects and confirms the server answers. Any client created along
    /// the way is released before an error is returned.
    async fn connect(&self, uri: &str) -> ProbeResult<Self::Session>;
}

/// An open connection to one database.
#[async_trait]
pub trait ProbeSession: Send + Sync + Sized {
    /// Address of the server the client targets.
    fn host(&self) -> &str;

    /// Name of the resolved database.
    fn database_name(&self) -> &str;

    fn ready_state(&self) -> ReadyState;

    /// Names of all collections visible in the database.
    async fn list_collection_names(&self) -> ProbeResult<Vec<String>>;

    /// Releases the connection.
    async fn close(self);
}
