use super::*;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders},
};

/// Render the add task screen.
///
pub fn add_task(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Add Task ", styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(&theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    form(frame, chunks[0], state.add_task_form_mut(), &theme);

    let progress = state
        .tasks()
        .is_loading()
        .then(|| ("Creating task...", state.get_spinner_index()));
    feedback(frame, chunks[1], state.current_error(), progress, &theme);
}
