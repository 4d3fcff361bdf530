//! MongoDB 连通性探测工具
//!
//! 单次连接目标数据库，输出：
//! - 主机与数据库名
//! - 连接状态
//! - 集合列表
//!
//! 任何失败都会输出排查建议并以状态码 1 退出。

mod config;
mod error;
mod models;
mod mongo;
mod report;
mod service;
mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use config::ProbeConfig;
use mongo::MongoConnector;
use service::ProbeService;
use session::Connector;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 初始化日志追踪（输出到 stderr，不干扰报告）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // 加载配置
    let config = ProbeConfig::load();

    let outcome = probe(MongoConnector, &config, &mut io::stdout(), &mut io::stderr()).await;
    if let Err(e) = &outcome {
        error!(error = %format!("{e:#}"), "Probe output failed");
    }
    ExitCode::from(exit_status(&outcome))
}

/// Runs the probe, writing the report to `out` and the failure report to
/// `err_out`. `Ok(false)` means the probe itself failed.
async fn probe<C, O, E>(
    connector: C,
    config: &ProbeConfig,
    out: &mut O,
    err_out: &mut E,
) -> anyhow::Result<bool>
where
    C: Connector,
    O: Write,
    E: Write,
{
    report::write_banner(out).context("Failed to write to stdout")?;
    report::write_target(out, config).context("Failed to write to stdout")?;

    let service = ProbeService::new(connector);
    match service.run(config).await {
        Ok(connection) => {
            report::write_success(out, &connection)
                .context("Failed to write report to stdout")?;
            Ok(true)
        }
        Err(e) => {
            report::write_failure(err_out, &e)
                .context("Failed to write error report to stderr")?;
            Ok(false)
        }
    }
}

/// Process exit status: 0 only when the probe succeeded and was reported.
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::ProbeError;
    use crate::service::tests::FakeConnector;

    /// Shared buffer standing in for the log output stream.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    async fn run(connector: FakeConnector) -> (anyhow::Result<bool>, String, String) {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let outcome = probe(connector, &ProbeConfig::default(), &mut out, &mut err_out).await;
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err_out).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_unreachable_server_exits_with_status_1() {
        let (outcome, out, err_out) = run(FakeConnector::unreachable()).await;

        assert!(matches!(outcome, Ok(false)));
        assert_eq!(exit_status(&outcome), 1);
        assert!(out.contains("🔌 Attempting to connect..."));
        assert!(!out.contains("SUCCESS"));

        assert!(err_out.contains("Server selection timeout: No available servers"));
        for (i, tip) in report::TROUBLESHOOTING_TIPS.iter().enumerate() {
            assert!(err_out.contains(&format!("{}. {}", i + 1, tip)));
        }
    }

    #[tokio::test]
    async fn test_listing_failure_exits_with_status_1() {
        let (outcome, _, err_out) = run(FakeConnector::failing_listing("not authorized")).await;

        assert!(matches!(outcome, Ok(false)));
        assert_eq!(exit_status(&outcome), 1);
        assert!(err_out.contains("Failed to list collections: not authorized"));
    }

    #[tokio::test]
    async fn test_success_exits_with_status_0() {
        let (outcome, out, err_out) = run(FakeConnector::with_collections(&["jobs", "users"])).await;

        assert!(matches!(outcome, Ok(true)));
        assert_eq!(exit_status(&outcome), 0);
        assert!(out.contains("Collections found: 2"));
        assert!(err_out.is_empty());
    }

    #[test]
    fn test_output_failure_exits_with_status_1() {
        let outcome: anyhow::Result<bool> = Err(anyhow::anyhow!("broken pipe"));
        assert_eq!(exit_status(&outcome), 1);
    }

    #[tokio::test]
    async fn test_failure_writes_only_the_report_at_default_log_level() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (_, _, err_out) = run(FakeConnector::unreachable()).await;
        let (_, _, listing_err_out) = run(FakeConnector::failing_listing("not authorized")).await;

        assert_eq!(logs.contents(), "");

        let mut expected = Vec::new();
        let err = ProbeError::Connection("Server selection timeout: No available servers".into());
        report::write_failure(&mut expected, &err).unwrap();
        assert_eq!(err_out, String::from_utf8(expected).unwrap());
        assert_eq!(err_out.matches("No available servers").count(), 1);
        assert_eq!(listing_err_out.matches("not authorized").count(), 1);

        // the capture itself works at this level
        tracing::warn!("capture check");
        assert!(logs.contents().contains("capture check"));
    }
}
