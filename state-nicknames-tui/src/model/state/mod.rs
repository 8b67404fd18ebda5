//! 页面状态模块

mod states;

pub use states::StatesState;
