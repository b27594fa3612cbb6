use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log pane when shown.
///
const LOG_HEIGHT: u16 = 10;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    status(frame, chunks[0], state);
    main(frame, chunks[1], state);
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);

    if state.has_delete_confirmation() {
        confirm_delete(frame, size, state);
    }
}
