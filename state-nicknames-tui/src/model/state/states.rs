//! 州名列表页面状态

use state_nicknames_core::{ListPresenter, ListSource};

/// 州名列表页面状态
#[derive(Debug, Default)]
pub struct StatesState {
    /// 列表数据与加载状态
    pub presenter: ListPresenter,
    /// 当前选中的索引
    pub selected: usize,
}

impl StatesState {
    /// 创建新的列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let count = self.presenter.row_count();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.presenter.row_count().saturating_sub(1);
    }

    /// 列表被替换后，把选中项限制在范围内
    pub fn clamp_selection(&mut self) {
        self.selected = self
            .selected
            .min(self.presenter.row_count().saturating_sub(1));
    }
}
