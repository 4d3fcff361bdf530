//! 连通性探测服务模块
//!
//! 单次尝试、无重试：连接 → 读取连接信息与集合列表 → 关闭。
//! 连接一旦建立，无论后续步骤成功与否都会关闭。

use tracing::{debug, info};

use crate::config::ProbeConfig;
use crate::error::ProbeResult;
use crate::models::ConnectionReport;
use crate::session::{Connector, ProbeSession};

/// Runs one connectivity probe through a connector.
pub struct ProbeService<C> {
    connector: C,
}

impl<C: Connector> ProbeService<C> {
    /// 创建新的探测服务实例
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Connects, inspects the database and closes the session.
    ///
    /// # Errors
    /// Returns the first failure. The session, once acquired, is closed
    /// before any error is returned.
    pub async fn run(&self, config: &ProbeConfig) -> ProbeResult<ConnectionReport> {
        info!(source = ?config.source, "Connecting to MongoDB");

        let session = match self.connector.connect(&config.connection_uri).await {
            Ok(session) => session,
            Err(e) => {
                debug!(stage = e.stage(), error = %e, "Connection attempt failed");
                return Err(e);
            }
        };

        let outcome = inspect(&session).await;
        session.close().await;

        match &outcome {
            Ok(report) => info!(
                host = %report.host,
                database = %report.database,
                collections = report.collections.len(),
                "Probe succeeded, connection closed"
            ),
            Err(e) => debug!(stage = e.stage(), error = %e, "Probe failed, connection closed"),
        }
        outcome
    }
}

async fn inspect<S: ProbeSession>(session: &S) -> ProbeResult<ConnectionReport> {
    let collections = session.list_collection_names().await?;
    Ok(ConnectionReport {
        host: session.host().to_string(),
        database: session.database_name().to_string(),
        state: session.ready_state(),
        collections,
    })
}
