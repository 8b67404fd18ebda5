//! 通用组件

pub mod spinner;
pub mod statusbar;
