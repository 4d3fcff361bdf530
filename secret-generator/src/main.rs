//! 部署密钥生成工具
//!
//! 从操作系统随机源生成部署所需的十六进制密钥：
//! - JWT_SECRET（32 字节，64 位十六进制）
//! - RANDOM_SECRET（16 字节，32 位十六进制）
//!
//! 并输出部署平台环境变量的配置说明。

mod error;
mod generator;
mod report;

use std::io::{self, Write};

use anyhow::Context;
use rand::rngs::OsRng;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // 初始化日志追踪（输出到 stderr，避免混入密钥输出）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_banner(&mut out).context("Failed to write to stdout")?;

    // 随机源不可用时直接失败，不降级
    let secrets = match generator::generate_all(&mut OsRng) {
        Ok(secrets) => secrets,
        Err(e) => {
            error!(error = %e, "密钥生成失败");
            return Err(e).context("Failed to generate secrets");
        }
    };
    debug!(count = secrets.len(), "secrets generated");

    report::write_report(&mut out, &secrets).context("Failed to write secrets to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
