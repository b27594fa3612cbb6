use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the selected list item.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text such as dates and hints.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for field labels and headings.
///
pub fn label_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for error messages.
///
pub fn error_text_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.error.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for a task status badge.
///
pub fn status_style(theme: &Theme, status: &str) -> Style {
    let color = match status.to_lowercase().as_str() {
        "completed" | "done" => theme.success,
        "in-progress" | "in progress" | "pending" => theme.warning,
        _ => theme.accent,
    };
    Style::default()
        .fg(color.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the footer mode badge.
///
pub fn footer_mode_style(theme: &Theme, color: crate::ui::theme::ColorSpec) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(color.to_color())
        .add_modifier(Modifier::BOLD)
}
