//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, Flow};
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char('j') if ctrl => Some(Action::Newline),
        KeyCode::Enter if alt => Some(Action::Newline),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Flow {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => Flow::Continue,
    }
}
