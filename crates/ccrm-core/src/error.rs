//! Error types for record operations and the interchange codec.
//!
//! Record errors are expected business-rule failures that callers present
//! to users. Interchange errors come from reading or writing flat files.

use std::io;

use thiserror::Error;

/// Errors raised by record construction, enrollment and registry lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The student already has an enrollment for this course.
    #[error("{reg_no} is already enrolled in {course_code}")]
    DuplicateEnrollment { reg_no: String, course_code: String },

    /// A course was built without a code or title.
    #[error("invalid course definition: {0}")]
    InvalidCourseDefinition(String),

    /// No student with this registration number exists.
    #[error("unknown student: {0}")]
    UnknownStudent(String),

    /// No course with this code exists.
    #[error("unknown course: {0}")]
    UnknownCourse(String),

    /// The student has no enrollment for this course.
    #[error("{reg_no} is not enrolled in {course_code}")]
    NotEnrolled { reg_no: String, course_code: String },
}

/// Errors raised while importing or exporting interchange files.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// A data line could not be turned into an entity. `line` is 1-based
    /// and counts the header.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A field value cannot be written without corrupting the line layout.
    #[error("field `{field}` contains a delimiter or line break: {value:?}")]
    DelimiterInField { field: &'static str, value: String },

    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InterchangeError {
    /// Returns `true` for malformed content, as opposed to I/O failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, InterchangeError::Parse { .. })
    }
}
