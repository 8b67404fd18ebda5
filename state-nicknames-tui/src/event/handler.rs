//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ListMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: &Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event), // 键盘事件
        _ => AppMessage::Noop, // 包括 Resize：下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: &KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(key)
        || DefaultKeymap::ALT_QUIT.matches(key)
        || DefaultKeymap::QUIT.matches(key)
    {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(key) || DefaultKeymap::REFRESH_PLAIN.matches(key) {
        return AppMessage::Refresh;
    }

    handle_list_keys(key)
}

/// 处理列表的按键
fn handle_list_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::NAV_UP.matches(key) || is_plain_char(key, 'k') {
        return AppMessage::List(ListMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(key) || is_plain_char(key, 'j') {
        return AppMessage::List(ListMessage::SelectNext);
    }
    if DefaultKeymap::NAV_FIRST.matches(key) {
        return AppMessage::List(ListMessage::SelectFirst);
    }
    if DefaultKeymap::NAV_LAST.matches(key) {
        return AppMessage::List(ListMessage::SelectLast);
    }
    AppMessage::Noop
}

fn is_plain_char(key: &KeyEvent, c: char) -> bool {
    key.modifiers == KeyModifiers::NONE && key.code == KeyCode::Char(c)
}
