//! 州名列表页面视图

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use state_nicknames_core::ListSource;

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染州名列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let source: &dyn ListSource = &app.states.presenter;

    if source.row_count() == 0 {
        // 加载中由指示器占据中央，不显示空状态
        if !app.states.presenter.is_loading() {
            render_empty(frame, area);
        }
    } else {
        render_list(source, app.states.selected, frame, area);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  No states to show", Styles::muted()),
        Line::from(""),
        Line::styled("  Press r to load again", Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染列表
fn render_list(source: &dyn ListSource, selected: usize, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = (0..source.row_count())
        .filter_map(|i| source.row_text(i))
        .map(|text| ListItem::new(Line::from(format!("  {text}"))).style(Styles::row()))
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}
