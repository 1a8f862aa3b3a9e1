use crate::config::KeyBindings;
use crate::tui::app::{App, Focus, Mode};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;
use crate::utils::{ParsedKeyBinding, has_primary_modifier, parse_key_binding};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    size as terminal_size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

/// Guard that ensures terminal state is restored even on panic
/// This is critical for TUI applications - if the terminal is left in raw mode
/// or alternate screen, the user's terminal will be unusable.
struct TerminalGuard {
    /// Track if we successfully entered raw mode
    raw_mode_enabled: bool,
    /// Track if we successfully entered alternate screen
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    /// Initialize terminal state and return a guard
    /// The guard will restore terminal state when dropped (even on panic)
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    /// Manually restore terminal state (called on normal exit)
    /// After calling this, the guard will do nothing on drop
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state even if we panic
        // Ignore errors in drop - we're already in a cleanup path
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

/// Key bindings parsed once at startup from their config strings
struct Bindings {
    quit: ParsedKeyBinding,
    accept: ParsedKeyBinding,
    focus_next: ParsedKeyBinding,
    commit: ParsedKeyBinding,
    remove: ParsedKeyBinding,
    list_up: ParsedKeyBinding,
    list_down: ParsedKeyBinding,
    copy: ParsedKeyBinding,
    help: ParsedKeyBinding,
}

impl Bindings {
    fn from_config(kb: &KeyBindings) -> Result<Self, TuiError> {
        let parse = |s: &str| parse_key_binding(s).map_err(TuiError::KeyBindingError);
        Ok(Self {
            quit: parse(&kb.quit)?,
            accept: parse(&kb.accept)?,
            focus_next: parse(&kb.focus_next)?,
            commit: parse(&kb.commit)?,
            remove: parse(&kb.remove)?,
            list_up: parse(&kb.list_up)?,
            list_down: parse(&kb.list_down)?,
            copy: parse(&kb.copy)?,
            help: parse(&kb.help)?,
        })
    }
}

/// How a key event ended the session, if it did
enum Outcome {
    Accept,
    Cancel,
}

/// Run the interactive session. Returns the serialized field value if the
/// user accepted, or `None` if they cancelled.
pub fn run_event_loop(mut app: App) -> Result<Option<String>, TuiError> {
    // Check terminal size before entering alternate screen
    // This allows us to show a helpful error message in the normal terminal
    let (width, height) = terminal_size()?;

    let min_width_with_border = Layout::MIN_WIDTH + 2; // +2 for borders
    let min_height_with_border = Layout::MIN_HEIGHT + 2; // +2 for borders

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, Minimum required: {}x{}. Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    let bindings = Bindings::from_config(&app.config.key_bindings)?;

    // Setup terminal with guard to ensure restoration on panic
    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let outcome = loop {
        // Check if status message should be auto-cleared
        app.check_status_message_timeout();

        terminal.draw(|f| {
            let layout = Layout::calculate(f.area());
            crate::tui::render::render(f, &mut app, &layout);
        })?;

        // Handle events - only process Press events to avoid duplicate processing on Windows
        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Press {
                        if let Some(outcome) = handle_key_event(&mut app, key_event, &bindings) {
                            break outcome;
                        }
                    }
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated from the frame area on the next draw
                }
                _ => {
                    // Ignore other event types (mouse, etc.)
                }
            }
        }
    };

    // Restore terminal state explicitly (guard will also restore on drop, but this is cleaner)
    guard.restore()?;

    match outcome {
        Outcome::Accept => Ok(Some(app.accepted_value())),
        Outcome::Cancel => Ok(None),
    }
}

fn handle_key_event(app: &mut App, key_event: KeyEvent, bindings: &Bindings) -> Option<Outcome> {
    // Help overlay swallows every key and closes on help/quit
    if app.mode == Mode::Help {
        if bindings.help.matches(&key_event) || bindings.quit.matches(&key_event) {
            app.mode = Mode::Normal;
        }
        return None;
    }

    // Session-wide bindings first, so they work regardless of focus
    if bindings.accept.matches(&key_event) {
        return Some(Outcome::Accept);
    }
    if bindings.quit.matches(&key_event) {
        return Some(Outcome::Cancel);
    }
    if bindings.help.matches(&key_event) {
        app.mode = Mode::Help;
        return None;
    }
    if bindings.copy.matches(&key_event) {
        copy_to_clipboard(app);
        return None;
    }
    if bindings.focus_next.matches(&key_event) {
        app.toggle_focus();
        return None;
    }

    match app.focus {
        Focus::Capture => handle_capture_key(app, key_event, bindings),
        Focus::List => handle_list_key(app, key_event, bindings),
    }

    None
}

fn handle_capture_key(app: &mut App, key_event: KeyEvent, bindings: &Bindings) {
    if bindings.commit.matches(&key_event) {
        app.commit_capture();
        return;
    }

    match key_event.code {
        KeyCode::Backspace => app.capture.delete_char(),
        KeyCode::Delete => app.capture.delete_forward(),
        KeyCode::Left => app.capture.move_cursor_left(),
        KeyCode::Right => app.capture.move_cursor_right(),
        KeyCode::Home => app.capture.move_cursor_home(),
        KeyCode::End => app.capture.move_cursor_end(),
        KeyCode::Char(c) if !has_primary_modifier(key_event.modifiers) => {
            app.capture.insert_char(c);
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key_event: KeyEvent, bindings: &Bindings) {
    if bindings.remove.matches(&key_event) {
        app.remove_selected();
        return;
    }
    if bindings.list_up.matches(&key_event) {
        app.select_previous();
        return;
    }
    if bindings.list_down.matches(&key_event) {
        app.select_next();
        return;
    }

    // Vim-style movement works alongside the configured bindings
    match key_event.code {
        KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('j') => app.select_next(),
        _ => {}
    }
}

fn copy_to_clipboard(app: &mut App) {
    let content = app.controller.serialized_value().to_string();
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        if let Err(e) = clipboard.set_text(&content) {
            app.set_status_message(format!("Failed to copy to clipboard: {}", e));
        } else {
            app.set_status_message("Copied to clipboard".to_string());
        }
    } else {
        app.set_status_message("Failed to access clipboard".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> (App, Bindings) {
        let config = Config::default();
        let bindings = Bindings::from_config(&config.key_bindings).unwrap();
        (App::new(config, None), bindings)
    }

    #[test]
    fn typing_and_commit_builds_the_serialized_value() {
        let (mut app, bindings) = app();
        for c in "Food".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)), &bindings);
        }
        handle_key_event(&mut app, press(KeyCode::Enter), &bindings);
        assert_eq!(app.capture.text(), "");
        assert_eq!(app.controller.serialized_value(), "Food");
    }

    #[test]
    fn enter_in_the_list_removes_the_selection() {
        let config = Config::default();
        let bindings = Bindings::from_config(&config.key_bindings).unwrap();
        let mut app = App::new(config, Some("Food,Rent,Utilities"));

        handle_key_event(&mut app, press(KeyCode::Tab), &bindings);
        assert_eq!(app.focus, Focus::List);

        handle_key_event(&mut app, press(KeyCode::Down), &bindings);
        handle_key_event(&mut app, press(KeyCode::Enter), &bindings);
        assert_eq!(app.controller.serialized_value(), "Food,Utilities");
    }

    #[test]
    fn accept_returns_the_serialized_value() {
        let (mut app, bindings) = app();
        for c in "Rent".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)), &bindings);
        }
        handle_key_event(&mut app, press(KeyCode::Enter), &bindings);
        let outcome = handle_key_event(&mut app, ctrl('s'), &bindings);
        assert!(matches!(outcome, Some(Outcome::Accept)));
        assert_eq!(app.accepted_value(), "Rent");
    }

    #[test]
    fn escape_cancels_the_session() {
        let (mut app, bindings) = app();
        let outcome = handle_key_event(&mut app, press(KeyCode::Esc), &bindings);
        assert!(matches!(outcome, Some(Outcome::Cancel)));
    }

    #[test]
    fn ctrl_chords_do_not_type_into_the_capture_field() {
        let (mut app, bindings) = app();
        // 'x' is not bound to anything; it must not land in the field either
        handle_key_event(&mut app, ctrl('x'), &bindings);
        assert_eq!(app.capture.text(), "");
    }

    #[test]
    fn help_overlay_swallows_keys_until_dismissed() {
        let (mut app, bindings) = app();
        handle_key_event(&mut app, press(KeyCode::F(1)), &bindings);
        assert_eq!(app.mode, Mode::Help);

        // Keys other than help/quit do nothing while the overlay is up
        handle_key_event(&mut app, press(KeyCode::Char('x')), &bindings);
        assert_eq!(app.capture.text(), "");
        assert_eq!(app.mode, Mode::Help);

        handle_key_event(&mut app, press(KeyCode::F(1)), &bindings);
        assert_eq!(app.mode, Mode::Normal);
    }
}
