use super::*;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the login screen.
///
pub fn login(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let area = centered_rect(60, 70, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Welcome Back ", styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(&theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(super::form::height(state.login_form())),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Sign in to continue",
        styling::muted_text_style(&theme),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    form(frame, chunks[1], state.login_form_mut(), &theme);

    let progress = state
        .session()
        .is_loading()
        .then(|| ("Logging in...", state.get_spinner_index()));
    feedback(frame, chunks[2], state.current_error(), progress, &theme);

    let toggle = if state.login_form().secrets_visible() {
        "hide password"
    } else {
        "show password"
    };
    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            "Don't have an account? Press Ctrl+S to sign up",
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
