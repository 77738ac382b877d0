use crate::domain::{SubjectList, TrackerError};

/// One subject's share of the total study time.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectShare {
    pub name: String,
    pub percentage: f64,
}

/// Aggregate analytics over the full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyStats {
    pub subject_count: usize,
    pub total_ms: u64,
    pub total_tasks: usize,
    /// Name and time of the subject with the most accumulated time.
    pub most_studied: (String, u64),
    /// Name and time of the subject with the least accumulated time.
    pub least_studied: (String, u64),
    /// Truncated integer average, like the original display.
    pub avg_time_ms: u64,
    pub avg_tasks_per_subject: f64,
    /// Per-subject time shares in collection order.
    pub shares: Vec<SubjectShare>,
}

/// Compute the analytics report over the collection. Fails with
/// `EmptyCollection` when there are no subjects; the caller special-cases
/// that before presenting.
pub fn compute_stats(subjects: &SubjectList) -> Result<StudyStats, TrackerError> {
    if subjects.is_empty() {
        return Err(TrackerError::EmptyCollection);
    }

    let mut total_ms: u64 = 0;
    let mut total_tasks: usize = 0;
    let mut most: Option<(&str, u64)> = None;
    let mut least: Option<(&str, u64)> = None;

    for subject in subjects.iter() {
        total_ms += subject.time_ms();
        total_tasks += subject.tasks().len();

        // Strict comparisons: the first occurrence wins ties
        match most {
            Some((_, t)) if subject.time_ms() <= t => {}
            _ => most = Some((subject.name(), subject.time_ms())),
        }
        match least {
            Some((_, t)) if subject.time_ms() >= t => {}
            _ => least = Some((subject.name(), subject.time_ms())),
        }
    }

    let count = subjects.len();
    let avg_time_ms = (total_ms as f64 / count as f64) as u64;
    let avg_tasks_per_subject = total_tasks as f64 / count as f64;

    let shares = subjects
        .iter()
        .map(|s| SubjectShare {
            name: s.name().to_string(),
            // Division by a zero total is undefined; report 0% for everyone
            percentage: if total_ms == 0 {
                0.0
            } else {
                (s.time_ms() as f64 / total_ms as f64) * 100.0
            },
        })
        .collect();

    let most = most.map(|(n, t)| (n.to_string(), t)).unwrap_or_default();
    let least = least.map(|(n, t)| (n.to_string(), t)).unwrap_or_default();

    Ok(StudyStats {
        subject_count: count,
        total_ms,
        total_tasks,
        most_studied: most,
        least_studied: least,
        avg_time_ms,
        avg_tasks_per_subject,
        shares,
    })
}
