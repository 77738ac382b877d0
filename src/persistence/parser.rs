use super::files::read_file;
use crate::domain::{validate_label, Subject};
use std::fmt;
use std::path::Path;

/// One skipped row from the persisted store: line number, raw content, and
/// the reason it was rejected. Non-fatal; decoding continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub line: usize,
    pub raw: String,
    pub reason: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} (skipped: {:?})",
            self.line, self.reason, self.raw
        )
    }
}

/// Everything a load pass produces: the decoded subjects, the per-row
/// diagnostics, and at most one I/O notice when the file could not be read
/// at all (in which case the collection is empty).
#[derive(Debug, Default)]
pub struct LoadedStore {
    pub subjects: Vec<Subject>,
    pub warnings: Vec<ParseWarning>,
    pub io_notice: Option<String>,
}

/// Decode the persisted store. The first line is the header and is skipped
/// regardless of content; each later line is one subject record. A
/// malformed row is reported and skipped, never aborting the whole load.
pub fn parse_store(content: &str) -> (Vec<Subject>, Vec<ParseWarning>) {
    let mut subjects: Vec<Subject> = Vec::new();
    let mut warnings = Vec::new();

    for (i, line) in content.lines().enumerate() {
        // Header row, ignored on read
        if i == 0 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line, &subjects) {
            Ok(subject) => subjects.push(subject),
            Err(reason) => warnings.push(ParseWarning {
                line: i + 1,
                raw: line.to_string(),
                reason,
            }),
        }
    }

    (subjects, warnings)
}

/// Parse one record: `name,time_ms[,task,...]`, fields trimmed. Rejects a
/// name already decoded in this pass (case-insensitive).
fn parse_record(line: &str, decoded: &[Subject]) -> Result<Subject, String> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    if parts.len() < 2 {
        return Err("expected at least name and time fields".to_string());
    }

    let name = validate_label("subject name", parts[0]).map_err(|e| e.to_string())?;

    if decoded.iter().any(|s| s.name().eq_ignore_ascii_case(&name)) {
        return Err(format!("duplicate subject name '{}'", name));
    }

    let time_ms: u64 = parts[1]
        .parse()
        .map_err(|_| format!("time field {:?} is not a non-negative integer", parts[1]))?;

    let tasks: Vec<String> = parts[2..].iter().map(|t| t.to_string()).collect();

    Subject::from_record(&name, time_ms, tasks).map_err(|e| e.to_string())
}

/// Load the store from disk. An unreadable or missing file is reported once
/// as an I/O notice and results in an empty collection, not a failure.
pub fn load_store(path: &Path) -> LoadedStore {
    match read_file(path) {
        Ok(Some(content)) => {
            let (subjects, warnings) = parse_store(&content);
            LoadedStore {
                subjects,
                warnings,
                io_notice: None,
            }
        }
        Ok(None) => LoadedStore {
            io_notice: Some(format!(
                "no data file at {}, starting with an empty collection",
                path.display()
            )),
            ..Default::default()
        },
        Err(e) => LoadedStore {
            io_notice: Some(format!("could not read {}: {:#}", path.display(), e)),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::serializer::HEADER;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_store() {
        let content = "Subject Name,Time,Tasks\n\
                       Math,5400000,Homework 3,Read chapter 2\n\
                       History,0\n";

        let (subjects, warnings) = parse_store(content);
        assert!(warnings.is_empty());
        assert_eq!(subjects.len(), 2);

        assert_eq!(subjects[0].name(), "Math");
        assert_eq!(subjects[0].time_ms(), 5_400_000);
        assert_eq!(subjects[0].tasks(), ["Homework 3", "Read chapter 2"]);

        assert_eq!(subjects[1].name(), "History");
        assert_eq!(subjects[1].time_ms(), 0);
        assert!(subjects[1].tasks().is_empty());
    }

    #[test]
    fn test_parse_trims_fields() {
        let content = "Subject Name,Time,Tasks\n  Math , 1000 , HW1 \n";
        let (subjects, warnings) = parse_store(content);
        assert!(warnings.is_empty());
        assert_eq!(subjects[0].name(), "Math");
        assert_eq!(subjects[0].time_ms(), 1_000);
        assert_eq!(subjects[0].tasks(), ["HW1"]);
    }

    #[test]
    fn test_malformed_row_is_skipped_not_fatal() {
        let content = "Subject Name,Time,Tasks\n\
                       Math,5400000,HW1\n\
                       ###bad###\n\
                       History,0\n";

        let (subjects, warnings) = parse_store(content);
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].name(), "Math");
        assert_eq!(subjects[1].name(), "History");

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line, 3);
        assert_eq!(warnings[0].raw, "###bad###");
    }

    #[test]
    fn test_rejects_bad_time_field() {
        let content = format!("{}\nMath,notanumber\nHistory,-5\n", HEADER);
        let (subjects, warnings) = parse_store(&content);
        assert!(subjects.is_empty());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].reason.contains("non-negative integer"));
        assert!(warnings[1].reason.contains("non-negative integer"));
    }

    #[test]
    fn test_rejects_invalid_task_field() {
        let content = format!("{}\nMath,0,ok task,bad|task\n", HEADER);
        let (subjects, warnings) = parse_store(&content);
        assert!(subjects.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_names_within_load() {
        let content = format!("{}\nMath,1000\nmath,2000\n", HEADER);
        let (subjects, warnings) = parse_store(&content);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].time_ms(), 1_000);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].reason.contains("duplicate"));
    }

    #[test]
    fn test_header_only_and_blank_lines() {
        let (subjects, warnings) = parse_store("Subject Name,Time,Tasks\n\n\n");
        assert!(subjects.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_content() {
        let (subjects, warnings) = parse_store("");
        assert!(subjects.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_store_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.csv");

        let loaded = load_store(&path);
        assert!(loaded.subjects.is_empty());
        assert!(loaded.warnings.is_empty());
        assert!(loaded.io_notice.is_some());
    }

    #[test]
    fn test_load_store_reads_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.csv");
        std::fs::write(&path, "Subject Name,Time,Tasks\nMath,100\n").unwrap();

        let loaded = load_store(&path);
        assert!(loaded.io_notice.is_none());
        assert_eq!(loaded.subjects.len(), 1);
        assert_eq!(loaded.subjects[0].name(), "Math");
    }
}
