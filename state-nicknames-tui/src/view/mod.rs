//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不做任何修改。
//!
//!     layout.rs               // 主布局：标题栏 + 列表 + 状态栏
//!     theme.rs                // 主题和样式
//!     components/             // 状态栏、加载指示器
//!     pages/                  // 州名列表页面
//!
//! 列表页面通过 core 的 `ListSource` 读取行数与行文本，
//! 行文本在每次渲染时按需生成。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
