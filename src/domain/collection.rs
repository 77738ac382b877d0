use super::error::TrackerError;
use super::subject::{validate_label, Subject};
use crate::timer::TimerSession;

/// The ordered, in-memory set of subjects. Insertion order is significant
/// for display and for the persisted file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectList {
    subjects: Vec<Subject>,
}

impl SubjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-decoded set of subjects. The loader guarantees
    /// validity and name uniqueness of what it hands over.
    pub fn from_subjects(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Subject> {
        self.subjects.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subject> {
        self.subjects.iter()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Case-insensitive name lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        self.subjects
            .iter()
            .any(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Append a new subject with zero time and no tasks.
    pub fn add_subject(&mut self, name: &str) -> Result<(), TrackerError> {
        let name = validate_label("subject name", name)?;
        if self.contains_name(&name) {
            return Err(TrackerError::DuplicateName(name));
        }
        self.subjects.push(Subject::new(&name)?);
        Ok(())
    }

    /// Remove the subject at `index`. Rejected while a timing session is
    /// targeting that index; a removal below a running target shifts the
    /// session's captured index so it keeps pointing at the same subject.
    pub fn remove_subject(
        &mut self,
        index: usize,
        timer: &mut TimerSession,
    ) -> Result<Subject, TrackerError> {
        if index >= self.subjects.len() {
            return Err(TrackerError::precondition(format!(
                "no subject at index {}",
                index
            )));
        }
        if timer.target() == Some(index) {
            return Err(TrackerError::precondition(
                "cannot remove a subject while it is being timed",
            ));
        }
        let removed = self.subjects.remove(index);
        timer.note_removed(index);
        Ok(removed)
    }

    pub fn add_task_to(&mut self, index: usize, task: &str) -> Result<(), TrackerError> {
        self.subject_mut(index)
            .ok_or_else(|| {
                TrackerError::precondition(format!("no subject at index {}", index))
            })?
            .add_task(task)
    }

    pub fn remove_task_from(&mut self, index: usize, task: &str) -> Result<(), TrackerError> {
        self.subject_mut(index)
            .ok_or_else(|| {
                TrackerError::precondition(format!("no subject at index {}", index))
            })?
            .remove_task(task)
    }

    pub(crate) fn subject_mut(&mut self, index: usize) -> Option<&mut Subject> {
        self.subjects.get_mut(index)
    }
}
