//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     drain(completions)                              // 收取后台完成的加载，交给 Update
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event);                  // 接收原始事件并翻译为消息
//!         dispatcher.execute(update(&mut app, msg))       // 更新状态，执行返回的命令
//!     }
//!     update(&mut app, Tick)                          // 推进加载指示器动画
//! }
//!
//! 所有对 Model 的修改都发生在这个线程上：
//! 后台任务只通过通道把 `LoadCompletion` 送回来，不直接触碰状态。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{LoadCompletion, LoadDispatcher};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &LoadDispatcher,
    completions: &mut UnboundedReceiver<LoadCompletion>,
) -> Result<()> {
    // 界面出现：开始首次加载
    dispatcher.execute(update::update(app, AppMessage::Refresh));

    loop {
        // 1. 收取已完成的加载
        while let Ok(completion) = completions.try_recv() {
            dispatcher.execute(update::update(app, AppMessage::LoadFinished(completion)));
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(&event);

            // 6. 更新状态
            dispatcher.execute(update::update(app, msg));
        }

        // 7. 指示器动画
        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
