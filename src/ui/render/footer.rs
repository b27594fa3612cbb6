use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the current screen.
///
fn hints(state: &State) -> &'static str {
    if state.has_delete_confirmation() {
        return " y/Enter: confirm delete | n/Esc: cancel";
    }
    match state.current_view() {
        View::Login => " Enter: login | Tab: next field | Ctrl+S: sign up | Ctrl+T: show/hide password | Ctrl+C: quit",
        View::Signup => " Enter: sign up | Tab: next field | Ctrl+S/Esc: back to login | Ctrl+T: show/hide password | Ctrl+C: quit",
        View::Tasks => " j/k: navigate | Enter: view | a: add | r: refresh | L: logout | Ctrl+L: log | q: quit",
        View::TaskDetail { .. } if state.is_editing() => " Tab: next field | Ctrl+S: save | Esc: cancel",
        View::TaskDetail { .. } => " e: edit | d: delete | Esc: back | Ctrl+L: log",
        View::AddTask => " Tab: next field | Ctrl+S: create | Esc: cancel",
    }
}

/// Render footer with the current mode and the key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let editing = state.is_editing() || matches!(state.current_view(), View::AddTask);
    let (mode, color) = if state.has_delete_confirmation() {
        (" DELETE ", theme.footer_delete)
    } else if editing {
        (" EDIT ", theme.footer_edit)
    } else {
        (" NORMAL ", theme.footer_normal)
    };

    let line = Line::from(vec![
        Span::styled(mode, styling::footer_mode_style(theme, color)),
        Span::styled(hints(state), styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_view() {
        let mut state = State::default();
        assert!(hints(&state).contains("Enter: login"));
        state.sign_in(None);
        assert!(hints(&state).contains("a: add"));
        state.open_task("a".to_string()).unwrap();
        assert!(hints(&state).contains("e: edit"));
        state.request_delete();
        assert!(hints(&state).contains("confirm delete"));
    }
}
