//! 加载指示器组件

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::view::theme::colors;

/// 指示器文字
const LABEL: &str = "Loading…";

/// 在区域中央渲染指示器
pub fn render(frame_symbol: &str, frame: &mut Frame, area: Rect) {
    let text = format!("{frame_symbol} {LABEL}");
    let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);

    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    frame.render_widget(Clear, cell);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors().spinner)),
        cell,
    );
}
