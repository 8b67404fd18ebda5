//!
//! src/backend/mod.rs
//! Backend 层：加载与配置
//!
//! Backend 层与 UI 完全解耦，不持有任何 Model 状态。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读取
//!         mod load_dispatcher;    // 在 tokio 运行时上执行加载，并把结果送回主循环
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层处理 AppMessage::Refresh
//!         ↓
//!     ListPresenter::begin_load() 返回 LoadTicket，Update 返回 Command::Load(ticket)
//!         ↓
//!     LoadDispatcher::execute() 在运行时上 spawn 任务
//!         ↓
//!     LoaderService::load()：抓取 → 解码（后台线程）
//!         ↓
//!     LoadCompletion { ticket, result } 经通道送回主循环
//!         ↓
//!     Update 层处理 AppMessage::LoadFinished，ListPresenter::complete()
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod load_dispatcher;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use load_dispatcher::{LoadCompletion, LoadDispatcher};
