use super::*;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the signup screen.
///
pub fn signup(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let area = centered_rect(60, 80, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Create Account ", styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(&theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(super::form::height(state.signup_form())),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Sign up to get started",
        styling::muted_text_style(&theme),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    form(frame, chunks[1], state.signup_form_mut(), &theme);

    let progress = state
        .session()
        .is_loading()
        .then(|| ("Creating account...", state.get_spinner_index()));
    feedback(frame, chunks[2], state.current_error(), progress, &theme);

    let toggle = if state.signup_form().secrets_visible() {
        "hide passwords"
    } else {
        "show passwords"
    };
    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            "Already have an account? Press Ctrl+S to log in",
            styling::normal_text_style(&theme),
        )),
        Line::from(Span::styled(
            format!("Ctrl+T: {}", toggle),
            styling::muted_text_style(&theme),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}
