use crate::domain::{format_duration, SubjectList};
use crate::persistence::{data_file, ensure_swot_dir, load_store};
use crate::report::stats::{compute_stats, StudyStats};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render the analytics report as plain text.
pub fn render_report(stats: &StudyStats) -> String {
    let mut report = String::new();

    report.push_str("Study Analytics Report\n\n");
    report.push_str(&format!(
        "Total Study Time: {}\n\n",
        format_duration(stats.total_ms)
    ));

    report.push_str(&format!(
        "Most Studied Subject: {} ({})\n",
        stats.most_studied.0,
        format_duration(stats.most_studied.1)
    ));
    report.push_str(&format!(
        "Least Studied Subject: {} ({})\n\n",
        stats.least_studied.0,
        format_duration(stats.least_studied.1)
    ));

    report.push_str(&format!(
        "Average Time per Subject: {}\n",
        format_duration(stats.avg_time_ms)
    ));
    report.push_str(&format!("Total Tasks: {}\n", stats.total_tasks));
    report.push_str(&format!(
        "Average Tasks per Subject: {:.1}\n\n",
        stats.avg_tasks_per_subject
    ));

    report.push_str("Time Distribution:\n");
    for share in &stats.shares {
        report.push_str(&format!(
            "{}: {}\n",
            share.name,
            format_percent(share.percentage)
        ));
    }

    report
}

/// Generate the analytics report from the persisted store and write it to a
/// file. Used by the `report` subcommand; the TUI renders the same text in
/// a modal instead.
pub fn generate_report(output_path: Option<PathBuf>) -> Result<PathBuf> {
    let data_path = data_file()?;
    let loaded = load_store(&data_path);

    if let Some(notice) = &loaded.io_notice {
        eprintln!("Warning: {}", notice);
    }
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
    }

    let subjects = SubjectList::from_subjects(loaded.subjects);
    let stats = compute_stats(&subjects)?;
    let report = render_report(&stats);

    let output = match output_path {
        Some(path) => path,
        None => ensure_swot_dir()?.join("report.txt"),
    };

    fs::write(&output, report)?;

    Ok(output)
}
