//! 列表消息

/// 列表选择消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 选择第一项
    SelectFirst,
    /// 选择最后一项
    SelectLast,
}
