//! 加载完成处理

use state_nicknames_core::Completion;

use crate::backend::LoadCompletion;
use crate::model::App;

/// 应用后台送回的加载结果
///
/// 失败不会出现在界面上（已在 LoaderService 中记录日志），只是停止指示器。
pub fn update(app: &mut App, completion: LoadCompletion) {
    let LoadCompletion { ticket, result } = completion;

    match app.states.presenter.complete(ticket, result) {
        Completion::Loaded { rows } => {
            log::debug!("List replaced with {rows} rows");
            app.states.clamp_selection();
        }
        Completion::Failed => {
            log::debug!("Load failed, keeping {} rows", app.states.presenter.records().len());
        }
        Completion::Stale => {
            log::debug!("Ignored result of generation {}", ticket.generation());
        }
    }
}
