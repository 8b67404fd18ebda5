//! 应用主消息枚举

use super::ListMessage;
use crate::backend::LoadCompletion;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 界面（重新）出现：开始一次加载，加载中时忽略
    Refresh,

    /// 列表相关消息
    List(ListMessage),

    /// 后台加载完成
    LoadFinished(LoadCompletion),

    /// 动画帧
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
