//! 日志初始化

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志目录名
const APP_DIR: &str = "state-nicknames";
/// 日志文件名
const LOG_FILE: &str = "state-nicknames.log";

/// 初始化日志
///
/// core 通过 `log` 门面输出，这里经 tracing-log 桥接后写入缓存目录下的文件。
/// 没有缓存目录时不记录日志，返回 `None`。
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let Some(dir) = dirs::cache_dir().map(|d| d.join(APP_DIR)) else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Starting state-nicknames, logging to {}", dir.join(LOG_FILE).display());

    Ok(Some(guard))
}
