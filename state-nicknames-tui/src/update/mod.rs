//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod list;               // 列表子消息处理
//!         mod load;               // 加载完成处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Command {...}
//!
//!
//!     update 本身不做 I/O。需要发起加载时返回 Command::Load(ticket)，
//!     由主循环交给 backend::LoadDispatcher 执行。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod list;
mod load;

use state_nicknames_core::LoadTicket;

use crate::message::AppMessage;
use crate::model::App;

/// Update 返回给主循环的副作用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 无副作用
    None,
    /// 在后台执行一次加载
    Load(LoadTicket),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            // 界面销毁：仍在进行的加载结果将被丢弃
            app.states.presenter.detach();
            app.should_quit = true;
        }

        AppMessage::Refresh => {
            if let Some(ticket) = app.states.presenter.begin_load() {
                return Command::Load(ticket);
            }
        }

        AppMessage::List(list_msg) => {
            list::update(app, list_msg);
        }

        AppMessage::LoadFinished(completion) => {
            load::update(app, completion);
        }

        AppMessage::Tick => {
            app.states.presenter.tick();
        }

        AppMessage::Noop => {}
    }

    Command::None
}
