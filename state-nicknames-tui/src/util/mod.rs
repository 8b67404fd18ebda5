//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 日志初始化（写入文件）
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     · 日志
//!         - 终端被 UI 占用，日志只能写文件：<cache_dir>/state-nicknames/state-nicknames.log
//!         - 级别由 RUST_LOG 控制，默认 info
//!
//! 注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!       panic 时由 init_terminal 安装的 hook 负责恢复。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
