use crate::Config;
use crate::controller::ListEntry;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// Remove affordance marker appended to every row. In the original form
/// widget this was a clickable "x" button per entry; here the marked row is
/// removed with the configured remove key while the list has focus.
const REMOVE_MARKER: &str = "✕";

/// Build the display rows for the current entries.
/// Pure function of the entry list; called fresh every frame so the rendered
/// list is always a full replacement, never an incremental patch.
pub fn build_rows(entries: &[ListEntry<'_>], max_width: usize) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let mut label = entry.label.to_string();
            // Reserve room for the marker and the space before it
            let label_budget = max_width.saturating_sub(REMOVE_MARKER.chars().count() + 1);
            if label.chars().count() > label_budget {
                label = label
                    .chars()
                    .take(label_budget.saturating_sub(3))
                    .collect::<String>()
                    + "...";
            }
            format!("{} {}", label, REMOVE_MARKER)
        })
        .collect()
}

pub fn render_category_list(
    f: &mut Frame,
    area: Rect,
    entries: &[ListEntry<'_>],
    list_state: &mut ListState,
    config: &Config,
    is_active: bool,
) {
    // Account for borders and padding when truncating
    let max_width = area.width.saturating_sub(4) as usize;

    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = if active_theme.highlight_fg.is_empty() {
        get_contrast_text_color(highlight_bg)
    } else {
        parse_color(&active_theme.highlight_fg)
    };

    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new("(no categories yet)").style(Style::default().add_modifier(Modifier::DIM))]
    } else {
        build_rows(entries, max_width)
            .into_iter()
            .map(ListItem::new)
            .collect()
    };

    let title = format!("Categories ({})", entries.len());
    let border_style = if is_active {
        Style::default().fg(highlight_bg)
    } else {
        Style::default().fg(fg_color)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .style(Style::default().fg(fg_color))
        .highlight_style(Style::default().bg(highlight_bg).fg(highlight_fg));

    f.render_stateful_widget(list, area, list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::TagListController;

    #[test]
    fn rows_follow_insertion_order() {
        let controller =
            TagListController::from_labels("categoriesString", ["Food", "Rent", "Utilities"]);
        let entries = controller.render();
        let rows = build_rows(&entries, 40);
        assert_eq!(rows, vec!["Food ✕", "Rent ✕", "Utilities ✕"]);
    }

    #[test]
    fn rows_are_idempotent_between_mutations() {
        let controller = TagListController::from_labels("categoriesString", ["Food", "Rent"]);
        let entries = controller.render();
        assert_eq!(build_rows(&entries, 40), build_rows(&entries, 40));
    }

    #[test]
    fn long_labels_are_truncated_with_ellipsis() {
        let controller = TagListController::from_labels(
            "categoriesString",
            ["a label that is much longer than the column"],
        );
        let entries = controller.render();
        let rows = build_rows(&entries, 20);
        assert!(rows[0].ends_with(&format!("... {}", REMOVE_MARKER)));
        assert!(rows[0].chars().count() <= 20);
    }
}
