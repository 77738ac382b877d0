use crate::app::{AppState, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns `Ok(true)` to quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingSubject | UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::RemovingTask => handle_task_picker_mode(app, key),
        UiMode::Analytics => handle_analytics_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Start/stop the timer on the selected subject
        KeyCode::Enter => {
            app.toggle_timer();
            Ok(false)
        }

        // Add subject
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_subject();
            Ok(false)
        }

        // Add task to the selected subject
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.start_add_task();
            Ok(false)
        }

        // Remove task (opens the picker)
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.start_remove_task();
            Ok(false)
        }

        // Remove subject
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.remove_selected_subject();
            Ok(false)
        }

        // View analytics
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.open_analytics();
            Ok(false)
        }

        // Save
        KeyCode::Char('s') | KeyCode::Char('S') => {
            if let Err(e) = app.save() {
                app.status = Some(format!("Error saving: {:#}", e));
            }
            Ok(false)
        }

        // Quit (the main loop saves on the way out)
        KeyCode::Char('q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing into the add-subject/add-task form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_input();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys in the remove-task picker
fn handle_task_picker_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.picker_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.picker_down();
            Ok(false)
        }
        KeyCode::Enter => {
            app.confirm_remove_task();
            Ok(false)
        }
        KeyCode::Esc => {
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Any dismissal key closes the analytics modal
fn handle_analytics_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v') => {
            app.close_analytics();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubjectList;
    use crate::persistence::TrackerMeta;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let app = AppState::new(
            SubjectList::new(),
            Vec::new(),
            TrackerMeta::default(),
            dir.path().join("data.csv"),
            dir.path().join("meta.json"),
        );
        (app, dir)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _dir) = test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert!(handle_key(&mut app, key(KeyCode::Esc)).unwrap());
        assert!(!handle_key(&mut app, key(KeyCode::Char('z'))).unwrap());
    }

    #[test]
    fn test_add_subject_through_keys() {
        let (mut app, _dir) = test_app();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingSubject);

        type_text(&mut app, "Math");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.subjects.len(), 1);
        assert_eq!(app.subjects.get(0).unwrap().name(), "Math");
    }

    #[test]
    fn test_backspace_edits_form() {
        let (mut app, _dir) = test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "Mathz");
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.input_buffer, "Math");
    }

    #[test]
    fn test_esc_cancels_form_without_adding() {
        let (mut app, _dir) = test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "Math");
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.subjects.is_empty());
    }

    #[test]
    fn test_timer_toggle_on_enter() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.timer.is_running());

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_task_picker_navigation() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();
        app.subjects.add_task_to(0, "Homework").unwrap();
        app.subjects.add_task_to(0, "Reading").unwrap();

        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::RemovingTask);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.subjects.get(0).unwrap().tasks(), ["Homework"]);
    }

    #[test]
    fn test_analytics_modal_keys() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();

        handle_key(&mut app, key(KeyCode::Char('v'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Analytics);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_selection_navigation() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();
        app.subjects.add_subject("History").unwrap();

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);
        // Clamped at the end of the list
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }
}
