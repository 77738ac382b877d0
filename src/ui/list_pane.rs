use crate::app::AppState;
use crate::domain::format_duration;
use crate::ui::styles::{
    border_style, default_style, selected_style, timing_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the subjects list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .subjects
        .iter()
        .enumerate()
        .map(|(idx, subject)| {
            let mut spans = Vec::new();

            // Numbered rows, like the original list renderer
            spans.push(Span::raw(format!("{}. {}", idx + 1, subject.display_line())));

            // Live readout for the subject currently being timed
            if app.timer.target() == Some(idx) {
                spans.push(Span::styled(
                    format!(
                        "  ● timing {}",
                        format_duration(app.timer.running_elapsed_ms())
                    ),
                    timing_style(),
                ));
            }

            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(" Subjects ({}) ", app.subjects.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
