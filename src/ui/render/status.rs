use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the status bar: the current screen on the left, the session on
/// the right.
///
pub fn status(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let breadcrumb = state
        .views()
        .iter()
        .map(|view| view.title())
        .collect::<Vec<_>>()
        .join(" > ");
    let mut left = vec![
        Span::styled(" Tasks ", styling::label_style(theme)),
        Span::styled("| ", styling::muted_text_style(theme)),
        Span::styled(breadcrumb, styling::normal_text_style(theme)),
    ];
    if state.is_loading() {
        left.push(Span::styled(
            format!(" {}", spinner::frame(state.get_spinner_index())),
            Style::default().fg(theme.accent.to_color()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), inner);

    let session = match state.session().user() {
        Some(user) if !user.name.is_empty() => format!("{} <{}> ", user.name, user.email),
        Some(user) => format!("{} ", user.email),
        None if state.session().is_authenticated() => "Signed in ".to_string(),
        None => "Not signed in ".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(session, styling::muted_text_style(theme)))
            .alignment(Alignment::Right),
        inner,
    );
}
