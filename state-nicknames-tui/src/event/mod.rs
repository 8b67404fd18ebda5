//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，下一轮自动重绘
//!             其余事件                             // 忽略
//!
//!         常用键盘映射：
//!             q / Alt+q / Ctrl+c  → AppMessage::Quit
//!             r / Alt+r           → AppMessage::Refresh
//!             ↑ / k               → ListMessage::SelectPrevious
//!             ↓ / j               → ListMessage::SelectNext
//!             Home / End          → ListMessage::SelectFirst / SelectLast
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
