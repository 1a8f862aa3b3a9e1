use crate::Config;
use crate::controller::{TagListController, split_labels};
use crate::tui::widgets::input::Input;
use crate::utils::format_key_binding_for_display;
use ratatui::widgets::ListState;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Capture,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct StatusState {
    pub message: Option<String>,
    pub message_time: Option<Instant>,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            message: None,
            message_time: None,
        }
    }
}

pub struct App {
    pub config: Config,
    pub controller: TagListController,
    pub capture: Input,
    pub focus: Focus,
    pub mode: Mode,
    pub selected_index: usize,
    pub list_state: ListState,
    pub status: StatusState,
}

impl App {
    /// Create the app, optionally pre-seeding the collection from an
    /// existing serialized value provided by the host.
    pub fn new(config: Config, seed: Option<&str>) -> Self {
        let controller = match seed {
            Some(value) => {
                TagListController::from_labels(&config.field_name, split_labels(value))
            }
            None => TagListController::new(&config.field_name),
        };

        let mut list_state = ListState::default();
        if !controller.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            config,
            controller,
            capture: Input::new(),
            focus: Focus::Capture,
            mode: Mode::Normal,
            selected_index: 0,
            list_state,
            status: StatusState::default(),
        }
    }

    /// Commit the capture field's current text as a new category.
    /// A blank field is a silent no-op and keeps its text; a successful add
    /// clears the field.
    pub fn commit_capture(&mut self) {
        if self.capture.is_blank() {
            return;
        }
        let raw = self.capture.take();
        self.controller.add_category(&raw);
        self.sync_selection();
    }

    /// Remove the entry currently selected in the list.
    /// The identity handle is taken from the rendered entries, so removal
    /// stays correct when entries were removed out of order before.
    pub fn remove_selected(&mut self) {
        let entries = self.controller.render();
        if entries.is_empty() {
            return;
        }
        let index = self.selected_index.min(entries.len() - 1);
        let entry = entries[index];
        let label = entry.label.to_string();
        if self.controller.remove_category(entry.id) {
            self.set_status_message(format!("Removed '{}'", label));
        }
        self.sync_selection();
    }

    pub fn select_next(&mut self) {
        let len = self.controller.len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
        self.sync_selection();
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.sync_selection();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Capture => Focus::List,
            Focus::List => Focus::Capture,
        };
        self.sync_selection();
    }

    /// The value handed back to the host when the session is accepted.
    pub fn accepted_value(&self) -> String {
        self.controller.serialized_value().to_string()
    }

    /// Clamp the selection to the current collection and mirror it into the
    /// ratatui list state.
    fn sync_selection(&mut self) {
        let len = self.controller.len();
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status.message = Some(message);
        self.status.message_time = Some(Instant::now());
    }

    pub fn clear_status_message(&mut self) {
        self.status.message = None;
        self.status.message_time = None;
    }

    /// Check if status message should be auto-cleared (after 3 seconds)
    pub fn check_status_message_timeout(&mut self) {
        const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 3;
        if let Some(time) = self.status.message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.clear_status_message();
            }
        }
    }

    /// Key hints for the status bar, matching the focused pane
    pub fn key_hints(&self) -> Vec<String> {
        let kb = &self.config.key_bindings;
        match self.focus {
            Focus::Capture => vec![
                format!("{}: Add", format_key_binding_for_display(&kb.commit)),
                format!("{}: List", format_key_binding_for_display(&kb.focus_next)),
                format!("{}: Accept", format_key_binding_for_display(&kb.accept)),
                format!("{}: Help", format_key_binding_for_display(&kb.help)),
                format!("{}: Quit", format_key_binding_for_display(&kb.quit)),
            ],
            Focus::List => vec![
                format!("{}: Remove", format_key_binding_for_display(&kb.remove)),
                format!(
                    "{}/{}: Move",
                    format_key_binding_for_display(&kb.list_up),
                    format_key_binding_for_display(&kb.list_down)
                ),
                format!("{}: Input", format_key_binding_for_display(&kb.focus_next)),
                format!("{}: Accept", format_key_binding_for_display(&kb.accept)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), None)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.capture.insert_char(ch);
        }
    }

    #[test]
    fn commit_clears_capture_and_serializes() {
        let mut app = app();
        type_text(&mut app, "Groceries");
        app.commit_capture();
        assert_eq!(app.capture.text(), "");
        assert_eq!(app.controller.serialized_value(), "Groceries");
    }

    #[test]
    fn blank_commit_leaves_everything_unchanged() {
        let mut app = app();
        type_text(&mut app, "   ");
        app.commit_capture();
        assert_eq!(app.capture.text(), "   ");
        assert!(app.controller.is_empty());
        assert_eq!(app.controller.serialized_value(), "");
    }

    #[test]
    fn seed_pre_populates_the_collection() {
        let app = App::new(Config::default(), Some("Food, Rent ,,Utilities"));
        assert_eq!(app.controller.serialized_value(), "Food,Rent,Utilities");
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn remove_selected_clamps_the_selection() {
        let mut app = App::new(Config::default(), Some("A,B,C"));
        app.selected_index = 2;
        app.sync_selection();

        app.remove_selected();
        assert_eq!(app.controller.serialized_value(), "A,B");
        // Selection moved back onto the new last entry
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.list_state.selected(), Some(1));

        app.remove_selected();
        app.remove_selected();
        assert!(app.controller.is_empty());
        assert_eq!(app.list_state.selected(), None);

        // Nothing left: a further remove is a no-op
        app.remove_selected();
        assert_eq!(app.controller.serialized_value(), "");
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut app = App::new(Config::default(), Some("A,B"));
        app.select_previous();
        assert_eq!(app.selected_index, 0);
        app.select_next();
        assert_eq!(app.selected_index, 1);
        app.select_next();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn focus_toggles_between_capture_and_list() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Capture);
        app.toggle_focus();
        assert_eq!(app.focus, Focus::List);
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Capture);
    }
}
