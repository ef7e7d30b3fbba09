//! Input handling - event translation

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the demo should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Activate the tag at or just before the cursor
    ActivateAtCursor,
    /// Mouse click at a screen position
    Click { col: u16, row: u16 },
    ShowHashTags,
    ShowAtTags,
    ToggleListener,
    Redraw,
    Quit,
}

/// Translate a terminal event into an action
pub fn translate_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(_, _) => Some(Action::Redraw),
        _ => None,
    }
}

/// Translate a key press
pub fn translate_key(key: KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('q') if ctrl => Action::Quit,
        KeyCode::Char('t') if ctrl => Action::ShowHashTags,
        KeyCode::Char('a') if ctrl => Action::ShowAtTags,
        KeyCode::Char('l') if ctrl => Action::ToggleListener,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) => Action::Insert(ch),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Home => Action::Home,
        KeyCode::End => Action::End,
        KeyCode::Enter => Action::ActivateAtCursor,
        _ => return None,
    };
    Some(action)
}

/// Translate a mouse event; only left-button presses matter
pub fn translate_mouse(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            col: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}
