//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend ──▶ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod list;           // 列表子消息
//!
//!         pub use app::AppMessage;
//!         pub use list::ListMessage;
//!
//!
//!     消息来源有两个：
//!         - event/handler.rs 把按键翻译成消息
//!         - app.rs 把后台送回的 LoadCompletion 包装成 AppMessage::LoadFinished
//!

mod app;
mod list;

pub use app::AppMessage;
pub use list::ListMessage;
