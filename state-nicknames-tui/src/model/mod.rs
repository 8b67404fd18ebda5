//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，且只发生在 UI 线程上。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 页面数据状态
//!
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub states: StatesState,            // 州名列表页面状态
//!             pub config: AppConfig,              // 启动时加载的配置
//!         }
//!
//!     StatesState 持有 core 的 ListPresenter（记录列表、加载阶段、指示器、代数）
//!     以及 UI 自己的选中行。
//!

mod app;
pub mod state;

pub use app::App;
pub use state::StatesState;
