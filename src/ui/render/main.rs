use super::*;
use crate::state::{State, View};
use ratatui::layout::Rect;

/// Render the screen of the current view.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_view() {
        View::Login => login(frame, size, state),
        View::Signup => signup(frame, size, state),
        View::Tasks => task_list(frame, size, state),
        View::TaskDetail { .. } => task_detail(frame, size, state),
        View::AddTask => add_task(frame, size, state),
    }
}
