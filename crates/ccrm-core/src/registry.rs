//! In-memory repository of students, courses and instructors.
//!
//! A `Registry` has a single owner that mutates it in place; it performs no
//! locking. Students are keyed by registration number, courses by code and
//! instructors by id. Inserting under an existing key replaces the old
//! entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine;
use crate::error::RecordError;
use crate::grade::Grade;
use crate::model::{Course, Enrollment, Instructor, Student};
use crate::report::{GpaReport, Transcript};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    students: BTreeMap<String, Student>,
    #[serde(default)]
    courses: BTreeMap<String, Course>,
    #[serde(default)]
    instructors: BTreeMap<String, Instructor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student, returning the one previously stored under the same
    /// registration number.
    pub fn add_student(&mut self, student: Student) -> Option<Student> {
        self.students.insert(student.reg_no().to_string(), student)
    }

    pub fn add_course(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.code().to_string(), course)
    }

    pub fn add_instructor(&mut self, instructor: Instructor) -> Option<Instructor> {
        self.instructors
            .insert(instructor.id().to_string(), instructor)
    }

    pub fn student(&self, reg_no: &str) -> Option<&Student> {
        self.students.get(reg_no)
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.get(id)
    }

    /// Students ordered by registration number.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Courses ordered by code.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.courses.is_empty() && self.instructors.is_empty()
    }

    /// Enroll a registered student in a catalog course.
    pub fn enroll(
        &mut self,
        reg_no: &str,
        course_code: &str,
    ) -> Result<&mut Enrollment, RecordError> {
        let course = self
            .courses
            .get(course_code)
            .ok_or_else(|| RecordError::UnknownCourse(course_code.to_string()))?;
        let student = self
            .students
            .get_mut(reg_no)
            .ok_or_else(|| RecordError::UnknownStudent(reg_no.to_string()))?;
        engine::enroll(student, course)
    }

    /// Grade an existing enrollment from a mark.
    pub fn record_grade(
        &mut self,
        reg_no: &str,
        course_code: &str,
        mark: f64,
    ) -> Result<Grade, RecordError> {
        let student = self
            .students
            .get_mut(reg_no)
            .ok_or_else(|| RecordError::UnknownStudent(reg_no.to_string()))?;
        let enrollment = student
            .enrollment_mut(course_code)
            .ok_or_else(|| RecordError::NotEnrolled {
                reg_no: reg_no.to_string(),
                course_code: course_code.to_string(),
            })?;
        Ok(engine::record_grade(enrollment, mark))
    }

    pub fn set_active(&mut self, reg_no: &str, active: bool) -> Result<(), RecordError> {
        let student = self
            .students
            .get_mut(reg_no)
            .ok_or_else(|| RecordError::UnknownStudent(reg_no.to_string()))?;
        student.set_active(active);
        Ok(())
    }

    pub fn transcript(&self, reg_no: &str) -> Result<Transcript, RecordError> {
        let student = self
            .student(reg_no)
            .ok_or_else(|| RecordError::UnknownStudent(reg_no.to_string()))?;
        Ok(Transcript::build(student, |code| self.course(code)))
    }

    /// Transcripts for every student, ordered by registration number.
    pub fn transcripts(&self) -> Vec<Transcript> {
        self.students
            .values()
            .map(|s| Transcript::build(s, |code| self.course(code)))
            .collect()
    }

    pub fn gpa_report(&self, top_n: usize) -> GpaReport {
        let students: Vec<&Student> = self.students().collect();
        GpaReport::compute(&students, top_n)
    }
}

/// Replaced students lose their enrollments; each replacement is logged.
impl Extend<Student> for Registry {
    fn extend<T: IntoIterator<Item = Student>>(&mut self, iter: T) {
        for student in iter {
            if let Some(old) = self.add_student(student) {
                tracing::warn!("replaced existing student {}", old.reg_no());
            }
        }
    }
}

impl Extend<Course> for Registry {
    fn extend<T: IntoIterator<Item = Course>>(&mut self, iter: T) {
        for course in iter {
            self.add_course(course);
        }
    }
}
