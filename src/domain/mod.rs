pub mod collection;
pub mod error;
pub mod format;
pub mod subject;

pub use collection::SubjectList;
pub use error::TrackerError;
pub use format::format_duration;
pub use subject::{validate_label, Subject};
