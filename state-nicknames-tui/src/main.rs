//! State Nicknames TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 加载与配置 (`backend/`)
//!
//!
//!     ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐
//!     │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │ ──▶ Command::Load
//!     └─────────┘     └─────────┘     └──────────┘     └────┬────┘          │
//!          ▲                               ▲                │               ▼
//!          │          ┌─────────┐          │                ▼         ┌──────────┐
//!          └──────────│  View   │ ◀── 读取 ─┼──────────── Model       │ Backend  │
//!            屏幕输出  └─────────┘          │                          │ (tokio)  │
//!                                          └──── LoadFinished ◀────── └──────────┘
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入缓存目录下的文件（终端归 UI 使用）
//!     load_config()           // 读取配置文件，缺失时使用默认值
//!     Runtime::new()          // 后台 tokio 运行时，负责网络请求
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环（主线程即 UI 线程）
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use state_nicknames_core::{HttpFetcher, LoaderService, RecordDecoder};

use backend::{ConfigService, LoadDispatcher, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（guard 必须活到程序结束，否则缓冲的日志会丢失）
    let _log_guard = init_logging()?;

    // 2. 加载配置
    let config = LocalConfigService::new().load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e:#}");
        backend::AppConfig::default()
    });
    view::theme::set_theme(config.theme);

    // 3. 后台运行时与加载服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let fetcher = HttpFetcher::new(config.endpoint.clone())?;
    let loader = Arc::new(LoaderService::new(Arc::new(fetcher), RecordDecoder::default()));
    let (dispatcher, mut completions) = LoadDispatcher::new(runtime.handle().clone(), loader);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &dispatcher, &mut completions);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 不等待仍在进行的请求，其结果已被 detach 作废
    runtime.shutdown_background();

    result
}
