use crate::Config;
use crate::tui::widgets::color::parse_color;
use crate::utils::format_key_binding_for_display;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render_help(f: &mut Frame, area: Rect, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    // Centered popup, following the ratatui popup example
    let popup_area = popup_area(area, 60, 60);

    // Clear the background first so content does not show through
    f.render_widget(Clear, popup_area);

    let help_text = build_help_text(config);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Key Bindings")
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect using a percentage of the available rect
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn build_help_text(config: &Config) -> String {
    let kb = &config.key_bindings;
    let mut text = String::new();

    text.push_str("Capture field:\n");
    text.push_str(&format!(
        "  {}: Add the typed text as a category\n",
        format_key_binding_for_display(&kb.commit)
    ));
    text.push_str(&format!(
        "  {}: Move focus to the category list\n",
        format_key_binding_for_display(&kb.focus_next)
    ));
    text.push('\n');

    text.push_str("Category list:\n");
    text.push_str(&format!(
        "  {} / {}: Move selection\n",
        format_key_binding_for_display(&kb.list_up),
        format_key_binding_for_display(&kb.list_down)
    ));
    text.push_str(&format!(
        "  {}: Remove the selected category\n",
        format_key_binding_for_display(&kb.remove)
    ));
    text.push('\n');

    text.push_str("Anywhere:\n");
    text.push_str(&format!(
        "  {}: Accept and print the serialized value\n",
        format_key_binding_for_display(&kb.accept)
    ));
    text.push_str(&format!(
        "  {}: Copy the serialized value to the clipboard\n",
        format_key_binding_for_display(&kb.copy)
    ));
    text.push_str(&format!(
        "  {}: Toggle this help\n",
        format_key_binding_for_display(&kb.help)
    ));
    text.push_str(&format!(
        "  {}: Quit without printing\n",
        format_key_binding_for_display(&kb.quit)
    ));

    text
}
