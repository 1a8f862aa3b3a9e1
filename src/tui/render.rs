use crate::tui::app::{App, Focus, Mode};
use crate::tui::layout::Layout;
use crate::tui::widgets::{
    category_list::render_category_list,
    color::parse_color,
    field_preview::render_field_preview,
    help::render_help,
    status_bar::render_status_bar,
};
use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    let active_theme = app.config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    // Outer border with the application name centered in the top border
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("tagfield")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(outer_block, f.area());

    // Capture input field
    let capture_active = app.focus == Focus::Capture && app.mode == Mode::Normal;
    let capture_border = if capture_active {
        Style::default().fg(highlight_bg)
    } else {
        Style::default().fg(fg_color)
    };
    let capture_paragraph = Paragraph::new(app.capture.text().to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Add category")
                .border_style(capture_border),
        )
        .style(Style::default().fg(fg_color));
    f.render_widget(capture_paragraph, layout.capture_area);

    // Category list; ratatui rebuilds the whole list every frame, so the
    // rendering is always a full replacement of the previous one
    let entries = app.controller.render();
    let list_active = app.focus == Focus::List && app.mode == Mode::Normal;
    render_category_list(
        f,
        layout.list_area,
        &entries,
        &mut app.list_state,
        &app.config,
        list_active,
    );

    // Serialized field preview - the exact value the host form receives
    render_field_preview(f, layout.field_area, app.controller.field(), &app.config);

    // Status bar: message if present, key hints otherwise
    let hints = app.key_hints();
    render_status_bar(
        f,
        layout.status_area,
        app.status.message.as_ref(),
        &hints,
        &app.config,
    );

    // Hardware cursor inside the capture field while it has focus
    if capture_active {
        let max_col = layout.capture_area.width.saturating_sub(2) as usize;
        let x = layout.capture_area.x + 1 + app.capture.cursor_col().min(max_col) as u16;
        let y = layout.capture_area.y + 1;
        f.set_cursor_position((x, y));
    }

    // Help popup overlays everything else
    if app.mode == Mode::Help {
        render_help(f, layout.inner_area, &app.config);
    }
}
