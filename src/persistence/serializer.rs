use super::files::atomic_write;
use crate::domain::{Subject, SubjectList};
use anyhow::Result;
use std::path::Path;

/// Fixed header row, written verbatim and ignored on read.
pub const HEADER: &str = "Subject Name,Time,Tasks";

/// Encode the collection into the persisted line format: the header, then
/// one `name,time_ms[,task,...]` row per subject in collection order. A
/// subject with no tasks writes only name and time, with no trailing comma.
pub fn serialize_store(subjects: &[Subject]) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    for subject in subjects {
        output.push_str(subject.name());
        output.push(',');
        output.push_str(&subject.time_ms().to_string());
        for task in subject.tasks() {
            output.push(',');
            output.push_str(task);
        }
        output.push('\n');
    }

    output
}

/// Write the collection to disk. The atomic write either replaces the whole
/// file or leaves the previous one untouched.
pub fn save_store(path: &Path, subjects: &SubjectList) -> Result<()> {
    atomic_write(path, &serialize_store(subjects.subjects()))
}
