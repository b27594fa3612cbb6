use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(" Log (Ctrl+L to hide) ")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    if state.get_logs().is_empty() {
        let placeholder = ListItem::new(Span::styled(
            "No log entries yet",
            styling::muted_text_style(theme),
        ));
        frame.render_widget(List::new(vec![placeholder]).block(block), size);
        return;
    }

    let visible = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .get_logs()
        .tail(visible)
        .into_iter()
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                Style::default().fg(theme.error.to_color())
            } else if entry.contains(" WARN ") {
                Style::default().fg(theme.warning.to_color())
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(Span::styled(entry, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
