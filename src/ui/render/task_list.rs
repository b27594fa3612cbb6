use super::*;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::dates::format_date;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the task list.
///
pub fn task_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let error = state.current_error().map(str::to_owned);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if error.is_some() { 1 } else { 0 }),
            Constraint::Min(0),
        ])
        .split(size);

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(message, styling::error_text_style(&theme))),
            chunks[0],
        );
    }

    let count = state.tasks().tasks().len();
    let title = match state.selected_task_index() {
        Some(index) => format!(" My Tasks ({} of {}) ", index + 1, count),
        None => format!(" My Tasks ({}) ", count),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(&theme));

    if state.tasks().tasks().is_empty() {
        let text = if state.tasks().is_loading() {
            "Loading tasks..."
        } else {
            "No tasks yet. Press a to add your first task."
        };
        let paragraph = Paragraph::new(Span::styled(text, styling::muted_text_style(&theme)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = state
        .tasks()
        .tasks()
        .iter()
        .map(|task| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    task.title.clone(),
                    styling::normal_text_style(&theme).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", task.status_label()),
                    styling::status_style(&theme, task.status_label()),
                ),
            ])];
            if let Some(first_line) = task.description_text().lines().next() {
                if !first_line.trim().is_empty() {
                    lines.push(Line::from(Span::styled(
                        first_line.to_string(),
                        styling::muted_text_style(&theme),
                    )));
                }
            }
            if let Some(created_at) = &task.created_at {
                lines.push(Line::from(Span::styled(
                    format!("Created {}", format_date(created_at)),
                    styling::muted_text_style(&theme),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style(&theme))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], state.get_tasks_list_state());
}
