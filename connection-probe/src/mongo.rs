//! MongoDB connector.
//!
//! Wraps the official driver: parses the connection string, creates a
//! client with driver-default timeouts and confirms the server with `ping`.

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::ErrorKind;
use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::{Client, Database};

use crate::error::{ProbeError, ProbeResult};
use crate::models::ReadyState;
use crate::session::{Connector, ProbeSession};

/// Application name reported to the server.
const APP_NAME: &str = "connection-probe";

/// Database used when the connection string names none.
const FALLBACK_DATABASE: &str = "test";

/// Connects to MongoDB through the official driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

/// An open MongoDB client bound to one database.
pub struct MongoSession {
    client: Client,
    database: Database,
    host: String,
    ready_state: ReadyState,
}

#[async_trait]
impl Connector for MongoConnector {
    type Session = MongoSession;

    async fn connect(&self, uri: &str) -> ProbeResult<MongoSession> {
        let mut options = ClientOptions::parse(uri).await.map_err(parse_error)?;
        options.app_name = Some(APP_NAME.to_string());
        let (host, database_name) = resolve_target(&options);

        let client = Client::with_options(options)
            .map_err(|e| ProbeError::Connection(e.to_string()))?;
        let database = client.database(&database_name);

        tracing::debug!(host = %host, database = %database_name, "Client created, pinging server");

        // 客户端已创建：ping 失败也要先关闭再返回
        let reply = match database.run_command(doc! { "ping": 1 }).await {
            Ok(reply) => reply,
            Err(e) => {
                client.shutdown().await;
                return Err(ProbeError::Connection(e.to_string()));
            }
        };

        Ok(MongoSession {
            client,
            database,
            host,
            ready_state: ready_state_from_reply(&reply),
        })
    }
}

#[async_trait]
impl ProbeSession for MongoSession {
    fn host(&self) -> &str {
        &self.host
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }

    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    async fn list_collection_names(&self) -> ProbeResult<Vec<String>> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| ProbeError::ListCollections(e.to_string()))
    }

    async fn close(self) {
        self.client.shutdown().await;
        tracing::debug!(host = %self.host, "Client shut down");
    }
}

/// Malformed strings are reported as such; anything else raised while
/// parsing (SRV or TXT lookups) is a connection problem.
fn parse_error(e: mongodb::error::Error) -> ProbeError {
    match e.kind.as_ref() {
        ErrorKind::InvalidArgument { .. } => ProbeError::InvalidUri(e.to_string()),
        _ => ProbeError::Connection(e.to_string()),
    }
}

/// First seed host name (without port) and the database named in the
/// connection string.
fn resolve_target(options: &ClientOptions) -> (String, String) {
    let host = options
        .hosts
        .first()
        .map(|address| match address {
            ServerAddress::Tcp { host, .. } => host.clone(),
            #[cfg(unix)]
            ServerAddress::Unix { path } => path.to_string_lossy().into_owned(),
            // `ServerAddress` is non_exhaustive; no other variants exist today.
            other => other.to_string(),
        })
        .unwrap_or_default();
    let database = options
        .default_database
        .clone()
        .unwrap_or_else(|| FALLBACK_DATABASE.to_string());
    (host, database)
}

/// `ok: 1` in the ping reply means the server accepted the client.
fn ready_state_from_reply(reply: &Document) -> ReadyState {
    let ok = match reply.get("ok") {
        Some(Bson::Double(v)) => *v == 1.0,
        Some(Bson::Int32(v)) => *v == 1,
        Some(Bson::Int64(v)) => *v == 1,
        _ => false,
    };
    if ok {
        ReadyState::Connected
    } else {
        ReadyState::Disconnected
    }
}
