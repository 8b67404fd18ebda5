//! 页面

pub mod states;
