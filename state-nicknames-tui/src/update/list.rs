//! 列表子消息处理

use crate::message::ListMessage;
use crate::model::App;

/// 处理列表消息
pub fn update(app: &mut App, msg: ListMessage) {
    match msg {
        ListMessage::SelectPrevious => app.states.select_previous(),
        ListMessage::SelectNext => app.states.select_next(),
        ListMessage::SelectFirst => app.states.select_first(),
        ListMessage::SelectLast => app.states.select_last(),
    }
}
