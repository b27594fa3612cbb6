use super::Frame;
use crate::state::Form;
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Height of a single line input including its borders.
///
const INPUT_HEIGHT: u16 = 3;

/// Return the height needed to render the single line fields of a form.
///
pub fn height(form: &Form) -> u16 {
    form.fields().len() as u16 * INPUT_HEIGHT
}

/// Render the fields of a form, one bordered input per field.
///
pub fn form(frame: &mut Frame, size: Rect, form: &mut Form, theme: &Theme) {
    let mut constraints: Vec<Constraint> = form
        .fields()
        .iter()
        .map(|field| {
            if field.is_multiline() {
                Constraint::Min(INPUT_HEIGHT + 2)
            } else {
                Constraint::Length(INPUT_HEIGHT)
            }
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let focused = form.focused();
    let secrets_visible = form.secrets_visible();
    for (index, (field, chunk)) in form.fields_mut().iter_mut().zip(chunks.iter()).enumerate() {
        let (border_style, cursor_style) = if index == focused {
            (
                styling::active_block_border_style(theme),
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else {
            (styling::normal_block_border_style(theme), Style::default())
        };
        let mut title = vec![Span::styled(field.label, styling::label_style(theme))];
        if field.is_secret() && !secrets_visible {
            title.push(Span::styled(" (hidden)", styling::muted_text_style(theme)));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title))
            .border_style(border_style);
        field.input.set_block(block);
        field.input.set_style(styling::normal_text_style(theme));
        field.input.set_cursor_style(cursor_style);
        field.input.set_cursor_line_style(Style::default());
        frame.render_widget(field.input.widget(), *chunk);
    }
}

/// Render a one line message below a form: the error if any, otherwise a
/// spinner with the given progress text while loading.
///
pub fn feedback(
    frame: &mut Frame,
    size: Rect,
    error: Option<&str>,
    progress: Option<(&str, usize)>,
    theme: &Theme,
) {
    let line = match (error, progress) {
        (Some(message), _) => Line::from(Span::styled(
            message.to_string(),
            styling::error_text_style(theme),
        )),
        (None, Some((text, spinner_index))) => Line::from(vec![
            Span::styled(
                format!("{} ", spinner::frame(spinner_index)),
                Style::default().fg(theme.accent.to_color()),
            ),
            Span::styled(text.to_string(), styling::muted_text_style(theme)),
        ]),
        (None, None) => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), size);
}
