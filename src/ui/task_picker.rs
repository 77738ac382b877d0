use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the remove-task picker over the selected subject's tasks
pub fn render_task_picker(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(subject) = app.subjects.get(app.selected_index) else {
        return;
    };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw("Select a task to remove:"));
    lines.push(Line::raw(""));

    for (idx, task) in subject.tasks().iter().enumerate() {
        let line = if idx == app.picker_index {
            Line::from(Span::styled(format!("> {}", task), selected_style()))
        } else {
            Line::raw(format!("  {}", task))
        };
        lines.push(line);
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw("Enter to remove  ·  Esc to cancel"));

    let title = format!(" Remove Task ({}) ", subject.name());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
