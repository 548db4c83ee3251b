//! Enrollment and grading rules.
//!
//! An enrollment starts ungraded when a student joins a course and becomes
//! graded once a mark is recorded. Recording another mark overwrites the
//! grade; there is no lock-in step.

use std::collections::btree_map::Entry;

use crate::error::RecordError;
use crate::grade::Grade;
use crate::model::{Course, Enrollment, Student};

/// Enroll `student` in `course`.
///
/// Only the student's enrollment map changes. Fails with
/// [`RecordError::DuplicateEnrollment`] if the student already holds an
/// enrollment for the course code, leaving the existing one untouched.
pub fn enroll<'s>(
    student: &'s mut Student,
    course: &Course,
) -> Result<&'s mut Enrollment, RecordError> {
    let reg_no = student.reg_no().to_string();
    match student.enrollments_mut().entry(course.code().to_string()) {
        Entry::Occupied(_) => Err(RecordError::DuplicateEnrollment {
            reg_no,
            course_code: course.code().to_string(),
        }),
        Entry::Vacant(slot) => Ok(slot.insert(Enrollment::new(&reg_no, course.code()))),
    }
}

/// Grade an enrollment from a numeric mark, replacing any earlier grade.
///
/// The mark is expected to be finite; callers validate it.
pub fn record_grade(enrollment: &mut Enrollment, mark: f64) -> Grade {
    let grade = Grade::from_marks(mark);
    enrollment.set_grade(grade);
    grade
}

/// Mean grade points over all of a student's enrollments.
///
/// Ungraded enrollments count as 0 points and stay in the denominator, so
/// an in-progress course pulls the average down. Conventional GPA would
/// skip them; this behaviour is kept for compatibility with existing
/// reports. A student with no enrollments has a GPA of 0.0.
pub fn gpa(student: &Student) -> f64 {
    let enrollments = student.enrollments();
    if enrollments.is_empty() {
        return 0.0;
    }
    let total: u32 = enrollments
        .values()
        .map(|e| e.grade().map(Grade::points).unwrap_or(0))
        .sum();
    total as f64 / enrollments.len() as f64
}
