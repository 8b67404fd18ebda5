//! 应用主状态结构

use super::StatesState;
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 州名列表页面状态
    pub states: StatesState,

    /// 配置
    pub config: AppConfig,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            states: StatesState::new(),
            config,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
