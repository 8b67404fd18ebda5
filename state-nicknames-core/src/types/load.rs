//! 加载周期相关类型

/// 列表加载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// 初始状态：列表为空，指示器关闭
    #[default]
    Idle,
    /// 加载中：指示器开启，上一轮的列表仍然显示
    Loading,
    /// 加载成功：列表已替换
    Loaded,
    /// 加载失败：列表保持不变
    Failed,
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// 一次加载的凭据
///
/// 携带发起时的代数（generation）。完成时若代数已前进，结果直接丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(self) -> u64 {
        self.generation
    }
}
