pub mod analytics_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod task_picker;

use crate::app::{AppState, UiMode};
use analytics_pane::render_analytics;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use styles::{error_style, status_style};
use task_picker::render_task_picker;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_list_pane(f, app, layout.list_area);
    render_status_line(f, app, layout.status_area);

    // Modals
    match app.ui_mode {
        UiMode::AddingSubject | UiMode::AddingTask => render_input_form(f, app, size),
        UiMode::RemovingTask => render_task_picker(f, app, size),
        UiMode::Analytics => render_analytics(f, app, size),
        UiMode::Normal => {}
    }
}

/// Render the one-line status/diagnostics bar
fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.starts_with("Error") {
            error_style()
        } else {
            status_style()
        };
        (format!(" {}", status), style)
    } else if !app.load_notices.is_empty() {
        (
            format!(
                " Loaded with {} warning(s): {}",
                app.load_notices.len(),
                app.load_notices[0]
            ),
            error_style(),
        )
    } else {
        (String::new(), status_style())
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
