use crate::Config;
use crate::controller::SerializedField;
use crate::tui::widgets::color::parse_color;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render the serialized hidden-field preview.
/// Shows the value exactly as the host form will receive it, titled with the
/// configured field name.
pub fn render_field_preview(f: &mut Frame, area: Rect, field: &SerializedField, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);

    let (content, style) = if field.value.is_empty() {
        (
            "(empty)".to_string(),
            Style::default().fg(fg_color).add_modifier(Modifier::DIM),
        )
    } else {
        (field.value.clone(), Style::default().fg(fg_color))
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.name.clone()),
        )
        .style(style);
    f.render_widget(paragraph, area);
}
