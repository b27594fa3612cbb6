use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the delete confirmation dialog on top of the current screen.
///
pub fn confirm_delete(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let area = centered_rect(50, 25, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Delete Task ", styling::active_block_title_style()))
        .border_style(Style::default().fg(theme.error.to_color()));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete this task?",
            styling::normal_text_style(theme),
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            styling::muted_text_style(theme),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", styling::error_text_style(theme)),
            Span::styled(": delete   ", styling::muted_text_style(theme)),
            Span::styled("n", styling::label_style(theme)),
            Span::styled(": cancel", styling::muted_text_style(theme)),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Return a rectangle covering the given share of `area`, centered in it.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale = |length: u16, percent: u16| {
        (u32::from(length) * u32::from(percent.min(100)) / 100) as u16
    };
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }

    #[test]
    fn centered_rect_respects_offset_area() {
        let outer = Rect::new(10, 5, 80, 20);
        let inner = centered_rect(100, 50, outer);
        assert_eq!(inner, Rect::new(10, 10, 80, 10));
    }
}
