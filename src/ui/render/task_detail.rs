use super::*;
use crate::api::Task;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use crate::utils::dates::format_date_time;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render task detail view (full screen).
///
pub fn task_detail(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let title = if state.is_editing() {
        " Edit Task "
    } else {
        " Task Details "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(&theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let progress_text = if state.is_editing() {
        "Saving..."
    } else {
        "Loading..."
    };
    let progress = state
        .tasks()
        .is_loading()
        .then(|| (progress_text, state.get_spinner_index()));

    if state.is_editing() {
        form(frame, chunks[0], state.edit_task_form_mut(), &theme);
    } else if let Some(task) = state.get_task_detail() {
        let paragraph = Paragraph::new(detail_lines(task, &theme)).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, chunks[0]);
    } else if !state.tasks().is_loading() && state.tasks().error().is_some() {
        let paragraph = Paragraph::new(Span::styled(
            "Task not found",
            styling::muted_text_style(&theme),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[0]);
    }
    feedback(frame, chunks[1], state.current_error(), progress, &theme);
}

/// Return the lines describing a task.
///
fn detail_lines(task: &Task, theme: &Theme) -> Vec<Line<'static>> {
    let label = |text: &'static str| Line::from(Span::styled(text, styling::label_style(theme)));
    let mut lines = vec![
        label("Title"),
        Line::from(Span::styled(
            task.title.clone(),
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label("Status"),
        Line::from(Span::styled(
            task.status_label().to_string(),
            styling::status_style(theme, task.status_label()),
        )),
        Line::from(""),
        label("Description"),
    ];

    if task.description_text().trim().is_empty() {
        lines.push(Line::from(Span::styled(
            "No description",
            styling::muted_text_style(theme),
        )));
    } else {
        lines.extend(task.description_text().lines().map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                styling::normal_text_style(theme),
            ))
        }));
    }

    if let Some(created_at) = &task.created_at {
        lines.push(Line::from(""));
        lines.push(label("Created"));
        lines.push(Line::from(Span::styled(
            format_date_time(created_at),
            styling::muted_text_style(theme),
        )));
    }
    if task.was_updated() {
        if let Some(updated_at) = &task.updated_at {
            lines.push(Line::from(""));
            lines.push(label("Last Updated"));
            lines.push(Line::from(Span::styled(
                format_date_time(updated_at),
                styling::muted_text_style(theme),
            )));
        }
    }
    lines
}
