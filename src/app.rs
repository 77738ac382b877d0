use crate::domain::{SubjectList, TrackerError};
use crate::persistence::{save_metadata, save_store, TrackerMeta};
use crate::report::{compute_stats, render_report};
use crate::timer::TimerSession;
use anyhow::Result;
use std::path::PathBuf;

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingSubject,
    AddingTask,
    RemovingTask,
    Analytics,
}

/// Main application state: the subject collection, the single timing
/// session, and the UI bookkeeping around them. Every key handler maps to
/// one core operation here and renders its result or error on the status
/// line.
pub struct AppState {
    pub subjects: SubjectList,
    pub timer: TimerSession,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    /// Text being typed into the add-subject/add-task form.
    pub input_buffer: String,
    /// Highlighted row in the remove-task picker.
    pub picker_index: usize,
    /// One-line feedback: last result or error.
    pub status: Option<String>,
    /// Rendered report text while the analytics modal is open.
    pub analytics_text: Option<String>,
    /// Diagnostics from the load pass (I/O notice, malformed rows).
    pub load_notices: Vec<String>,
    pub meta: TrackerMeta,
    pub data_path: PathBuf,
    pub meta_path: PathBuf,
    pub needs_save: bool,
}

impl AppState {
    pub fn new(
        subjects: SubjectList,
        load_notices: Vec<String>,
        meta: TrackerMeta,
        data_path: PathBuf,
        meta_path: PathBuf,
    ) -> Self {
        Self {
            subjects,
            timer: TimerSession::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_buffer: String::new(),
            picker_index: 0,
            status: None,
            analytics_text: None,
            load_notices,
            meta,
            data_path,
            meta_path,
            needs_save: false,
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.subjects.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.subjects.len() {
            self.selected_index = self.subjects.len().saturating_sub(1);
        }
    }

    fn report_error(&mut self, err: TrackerError) {
        self.status = Some(format!("Error: {}", err));
    }

    fn require_selection(&self) -> Result<usize, TrackerError> {
        if self.subjects.is_empty() {
            return Err(TrackerError::precondition("no subject selected"));
        }
        Ok(self.selected_index)
    }

    /// Start timing the selected subject, or stop and commit the running
    /// session.
    pub fn toggle_timer(&mut self) {
        if self.timer.is_running() {
            let target = self.timer.target();
            match self.timer.stop(&mut self.subjects) {
                Ok(elapsed) => {
                    let name = target
                        .and_then(|i| self.subjects.get(i))
                        .map(|s| s.name().to_string())
                        .unwrap_or_default();
                    self.status = Some(format!(
                        "Recorded {} for {}",
                        crate::domain::format_duration(elapsed),
                        name
                    ));
                    self.needs_save = true;
                }
                Err(e) => self.report_error(e),
            }
            return;
        }

        match self
            .require_selection()
            .and_then(|i| self.timer.start(i, &self.subjects))
        {
            Ok(()) => {
                let name = self
                    .subjects
                    .get(self.selected_index)
                    .map(|s| s.name().to_string())
                    .unwrap_or_default();
                self.status = Some(format!("Timing {}", name));
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn start_add_subject(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::AddingSubject;
    }

    pub fn start_add_task(&mut self) {
        match self.require_selection() {
            Ok(_) => {
                self.input_buffer.clear();
                self.ui_mode = UiMode::AddingTask;
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Open the remove-task picker over the selected subject's tasks.
    pub fn start_remove_task(&mut self) {
        let result = self.require_selection().and_then(|i| {
            match self.subjects.get(i) {
                Some(subject) if !subject.tasks().is_empty() => Ok(()),
                _ => Err(TrackerError::precondition("no tasks available to remove")),
            }
        });
        match result {
            Ok(()) => {
                self.picker_index = 0;
                self.ui_mode = UiMode::RemovingTask;
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Submit the input form: adds a subject or a task depending on mode.
    pub fn submit_input(&mut self) {
        let text = self.input_buffer.clone();
        let result = match self.ui_mode {
            UiMode::AddingSubject => self
                .subjects
                .add_subject(&text)
                .map(|()| format!("Added subject {}", text.trim())),
            UiMode::AddingTask => self
                .require_selection()
                .and_then(|i| self.subjects.add_task_to(i, &text))
                .map(|()| format!("Added task {}", text.trim())),
            _ => return,
        };

        match result {
            Ok(msg) => {
                self.status = Some(msg);
                self.needs_save = true;
                self.cancel_input();
            }
            // Keep the form open so the input can be corrected
            Err(e) => self.report_error(e),
        }
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn picker_up(&mut self) {
        if self.picker_index > 0 {
            self.picker_index -= 1;
        }
    }

    pub fn picker_down(&mut self) {
        let task_count = self
            .subjects
            .get(self.selected_index)
            .map(|s| s.tasks().len())
            .unwrap_or(0);
        if self.picker_index + 1 < task_count {
            self.picker_index += 1;
        }
    }

    /// Remove the task highlighted in the picker.
    pub fn confirm_remove_task(&mut self) {
        let picked = self
            .subjects
            .get(self.selected_index)
            .and_then(|s| s.tasks().get(self.picker_index))
            .cloned();

        let result = match picked {
            Some(task) => self
                .subjects
                .remove_task_from(self.selected_index, &task)
                .map(|()| format!("Removed task {}", task)),
            None => Err(TrackerError::precondition("no task selected")),
        };

        match result {
            Ok(msg) => {
                self.status = Some(msg);
                self.needs_save = true;
            }
            Err(e) => self.report_error(e),
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Remove the selected subject. Rejected while it is being timed.
    pub fn remove_selected_subject(&mut self) {
        let result = self
            .require_selection()
            .and_then(|i| self.subjects.remove_subject(i, &mut self.timer));
        match result {
            Ok(removed) => {
                self.status = Some(format!("Removed subject {}", removed.name()));
                self.needs_save = true;
                self.clamp_selection();
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Compute and show the analytics report, or report the empty-collection
    /// condition.
    pub fn open_analytics(&mut self) {
        match compute_stats(&self.subjects) {
            Ok(stats) => {
                self.analytics_text = Some(render_report(&stats));
                self.ui_mode = UiMode::Analytics;
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn close_analytics(&mut self) {
        self.analytics_text = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Stop a running session so its time is committed before shutdown.
    pub fn stop_timer_if_running(&mut self) {
        if self.timer.is_running() {
            if self.timer.stop(&mut self.subjects).is_ok() {
                self.needs_save = true;
            }
        }
    }

    /// Persist the store and metadata.
    pub fn save(&mut self) -> Result<()> {
        save_store(&self.data_path, &self.subjects)?;
        self.meta.note_saved();
        save_metadata(&self.meta_path, &self.meta)?;
        self.needs_save = false;
        self.status = Some(format!(
            "Saved {} subjects to {}",
            self.subjects.len(),
            self.data_path.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

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

    #[test]
    fn test_add_subject_via_form() {
        let (mut app, _dir) = test_app();

        app.start_add_subject();
        assert_eq!(app.ui_mode, UiMode::AddingSubject);

        app.input_buffer.push_str("Math");
        app.submit_input();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.subjects.len(), 1);
        assert!(app.needs_save);
        assert_eq!(app.status.as_deref(), Some("Added subject Math"));
    }

    #[test]
    fn test_duplicate_subject_keeps_form_open() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();

        app.start_add_subject();
        app.input_buffer.push_str("math");
        app.submit_input();

        assert_eq!(app.ui_mode, UiMode::AddingSubject);
        assert_eq!(app.subjects.len(), 1);
        assert!(app.status.unwrap().contains("already exists"));
    }

    #[test]
    fn test_add_task_requires_selection() {
        let (mut app, _dir) = test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.status.unwrap().contains("no subject selected"));
    }

    #[test]
    fn test_toggle_timer_round_trip() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();

        app.toggle_timer();
        assert!(app.timer.is_running());
        assert_eq!(app.status.as_deref(), Some("Timing Math"));

        app.toggle_timer();
        assert!(!app.timer.is_running());
        assert!(app.needs_save);
        assert!(app.status.unwrap().starts_with("Recorded "));
    }

    #[test]
    fn test_toggle_timer_with_no_subjects() {
        let (mut app, _dir) = test_app();
        app.toggle_timer();
        assert!(!app.timer.is_running());
        assert!(app.status.unwrap().contains("no subject selected"));
    }

    #[test]
    fn test_remove_timed_subject_reports_error() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();
        app.toggle_timer();

        app.remove_selected_subject();
        assert_eq!(app.subjects.len(), 1);
        assert!(app.status.unwrap().contains("being timed"));
    }

    #[test]
    fn test_remove_subject_clamps_selection() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();
        app.subjects.add_subject("History").unwrap();
        app.selected_index = 1;

        app.remove_selected_subject();
        assert_eq!(app.subjects.len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_remove_task_picker_flow() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();
        app.subjects.add_task_to(0, "Homework").unwrap();
        app.subjects.add_task_to(0, "Reading").unwrap();

        app.start_remove_task();
        assert_eq!(app.ui_mode, UiMode::RemovingTask);

        app.picker_down();
        app.confirm_remove_task();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.subjects.get(0).unwrap().tasks(), ["Homework"]);
    }

    #[test]
    fn test_remove_task_with_empty_list() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();

        app.start_remove_task();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.status.unwrap().contains("no tasks available"));
    }

    #[test]
    fn test_analytics_on_empty_collection() {
        let (mut app, _dir) = test_app();
        app.open_analytics();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.analytics_text.is_none());
        assert!(app.status.unwrap().contains("no subjects to analyze"));
    }

    #[test]
    fn test_analytics_modal_opens() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();

        app.open_analytics();
        assert_eq!(app.ui_mode, UiMode::Analytics);
        assert!(app
            .analytics_text
            .as_deref()
            .unwrap()
            .contains("Study Analytics Report"));

        app.close_analytics();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.analytics_text.is_none());
    }

    #[test]
    fn test_save_writes_store_and_metadata() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();
        app.needs_save = true;

        app.save().unwrap();
        assert!(!app.needs_save);
        assert_eq!(app.meta.save_count, 1);

        let content = std::fs::read_to_string(&app.data_path).unwrap();
        assert_eq!(content, "Subject Name,Time,Tasks\nMath,0\n");
        assert!(app.meta_path.exists());
    }

    #[test]
    fn test_stop_timer_if_running_commits() {
        let (mut app, _dir) = test_app();
        app.subjects.add_subject("Math").unwrap();
        app.toggle_timer();

        app.stop_timer_if_running();
        assert!(!app.timer.is_running());
        assert!(app.needs_save);
    }
}
