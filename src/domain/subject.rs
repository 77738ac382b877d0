use super::error::TrackerError;
use super::format::format_duration;

/// Validate a subject name or task label: ASCII alphanumerics plus spaces,
/// non-blank after trimming. Returns the trimmed value.
///
/// Validation happens here, at the insertion boundary, so anything stored in
/// a `Subject` already satisfies the character-set rule.
pub fn validate_label(field: &'static str, value: &str) -> Result<String, TrackerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidArgument {
            field,
            reason: "cannot be blank".to_string(),
        });
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ')
    {
        return Err(TrackerError::InvalidArgument {
            field,
            reason: "must contain only letters, digits and spaces".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// One tracked topic of study: a name, the accumulated study time, and an
/// ordered list of free-text tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    accumulated_ms: u64,
    tasks: Vec<String>,
}

impl Subject {
    /// Create a subject with zero time and no tasks.
    pub fn new(name: &str) -> Result<Self, TrackerError> {
        let name = validate_label("subject name", name)?;
        Ok(Self {
            name,
            accumulated_ms: 0,
            tasks: Vec::new(),
        })
    }

    /// Reconstruct a subject from a persisted record. Tasks are validated
    /// with the same character-set rule as the name.
    pub fn from_record(
        name: &str,
        accumulated_ms: u64,
        tasks: Vec<String>,
    ) -> Result<Self, TrackerError> {
        let name = validate_label("subject name", name)?;
        let tasks = tasks
            .iter()
            .map(|t| validate_label("task", t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name,
            accumulated_ms,
            tasks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accumulated study time in milliseconds.
    pub fn time_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Add a completed measurement to the accumulated time. The `u64`
    /// argument makes negative deltas unrepresentable; the accumulated time
    /// only ever grows.
    pub fn add_time(&mut self, delta_ms: u64) {
        self.accumulated_ms = self.accumulated_ms.saturating_add(delta_ms);
    }

    /// Append a task to the list. Duplicates are permitted; order is
    /// insertion order.
    pub fn add_task(&mut self, task: &str) -> Result<(), TrackerError> {
        let task = validate_label("task", task)?;
        self.tasks.push(task);
        Ok(())
    }

    /// Remove the first task equal to `task`.
    pub fn remove_task(&mut self, task: &str) -> Result<(), TrackerError> {
        if self.tasks.is_empty() {
            return Err(TrackerError::precondition("no tasks available to remove"));
        }
        match self.tasks.iter().position(|t| t == task) {
            Some(pos) => {
                self.tasks.remove(pos);
                Ok(())
            }
            None => Err(TrackerError::precondition(format!(
                "no task '{}' on subject '{}'",
                task, self.name
            ))),
        }
    }

    /// One-line display string: name, formatted time, and the task list.
    pub fn display_line(&self) -> String {
        if self.tasks.is_empty() {
            format!("{} ({})", self.name, format_duration(self.accumulated_ms))
        } else {
            format!(
                "{} ({}) tasks: {}",
                self.name,
                format_duration(self.accumulated_ms),
                self.tasks.join(", ")
            )
        }
    }
}
