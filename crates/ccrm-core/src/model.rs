//! Core record types for ccrm.
//!
//! Students own their enrollments. Courses are immutable and only ever
//! referenced by code; instructors are loosely attached to courses by id.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::gpa;
use crate::error::RecordError;
use crate::grade::Grade;

/// Academic terms a course can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::Spring, Semester::Summer, Semester::Fall];
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semester::Spring => write!(f, "SPRING"),
            Semester::Summer => write!(f, "SUMMER"),
            Semester::Fall => write!(f, "FALL"),
        }
    }
}

impl FromStr for Semester {
    type Err = String;

    /// Names must match exactly; `fall` or ` FALL` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPRING" => Ok(Semester::Spring),
            "SUMMER" => Ok(Semester::Summer),
            "FALL" => Ok(Semester::Fall),
            other => Err(format!("unknown semester: {other:?}")),
        }
    }
}

/// Identity fields shared by every kind of person in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

/// Anything that can describe itself in a one-line profile.
pub trait Profile {
    fn identity(&self) -> &Identity;

    fn profile(&self) -> String;
}

/// A student and the enrollments they own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    identity: Identity,
    reg_no: String,
    active: bool,
    /// Keyed by course code, so a course can appear at most once.
    enrollments: BTreeMap<String, Enrollment>,
}

impl Student {
    /// Create an active student with no enrollments.
    pub fn new(
        id: impl Into<String>,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::new(id, full_name, email),
            reg_no: reg_no.into(),
            active: true,
            enrollments: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.identity.id
    }

    /// Registration number; the primary lookup key.
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    pub fn full_name(&self) -> &str {
        &self.identity.full_name
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.identity.created_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Enrollments in ascending course-code order.
    pub fn enrollments(&self) -> &BTreeMap<String, Enrollment> {
        &self.enrollments
    }

    pub fn enrollment(&self, course_code: &str) -> Option<&Enrollment> {
        self.enrollments.get(course_code)
    }

    pub fn enrollment_mut(&mut self, course_code: &str) -> Option<&mut Enrollment> {
        self.enrollments.get_mut(course_code)
    }

    pub(crate) fn enrollments_mut(&mut self) -> &mut BTreeMap<String, Enrollment> {
        &mut self.enrollments
    }
}

impl Profile for Student {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn profile(&self) -> String {
        format!(
            "{} ({}) Active:{} GPA:{:.2}",
            self.identity.full_name,
            self.reg_no,
            self.active,
            gpa(self)
        )
    }
}

/// A teaching staff member. Courses point at instructors by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    identity: Identity,
    emp_id: String,
    department: String,
}

impl Instructor {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        emp_id: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::new(id, full_name, email),
            emp_id: emp_id.into(),
            department: department.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.identity.id
    }

    pub fn emp_id(&self) -> &str {
        &self.emp_id
    }

    pub fn department(&self) -> &str {
        &self.department
    }
}

impl Profile for Instructor {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn profile(&self) -> String {
        format!("{} [{}]", self.identity.full_name, self.department)
    }
}

/// An immutable catalog entry. Build one with [`Course::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    credits: u32,
    semester: Semester,
    department: String,
    instructor_id: Option<String>,
}

impl Course {
    pub fn builder() -> CourseBuilder {
        CourseBuilder::default()
    }

    /// Course code; the primary key.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn instructor_id(&self) -> Option<&str> {
        self.instructor_id.as_deref()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}({}cr) [{}]",
            self.code, self.title, self.credits, self.semester
        )
    }
}

/// Step-by-step construction of a [`Course`].
///
/// Unset credits default to 0, the semester to `FALL` and the department
/// to an empty string. Credits are not range-checked, so an explicit 0 is
/// accepted as well.
#[derive(Debug, Clone, Default)]
pub struct CourseBuilder {
    code: Option<String>,
    title: Option<String>,
    credits: u32,
    semester: Option<Semester>,
    department: String,
    instructor_id: Option<String>,
}

impl CourseBuilder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    pub fn semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }

    /// Finish the course. Fails when code or title is missing or blank.
    pub fn build(self) -> Result<Course, RecordError> {
        let code = self
            .code
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| RecordError::InvalidCourseDefinition("code is required".into()))?;
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                RecordError::InvalidCourseDefinition(format!("title is required for {code}"))
            })?;

        Ok(Course {
            code,
            title,
            credits: self.credits,
            semester: self.semester.unwrap_or(Semester::Fall),
            department: self.department,
            instructor_id: self.instructor_id,
        })
    }
}

/// The link between one student and one course.
///
/// `grade` is `None` while the course is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    student_reg_no: String,
    course_code: String,
    enrolled_at: DateTime<Utc>,
    grade: Option<Grade>,
}

impl Enrollment {
    pub(crate) fn new(student_reg_no: &str, course_code: &str) -> Self {
        Self {
            student_reg_no: student_reg_no.to_string(),
            course_code: course_code.to_string(),
            enrolled_at: Utc::now(),
            grade: None,
        }
    }

    /// Registration number of the owning student.
    pub fn student_reg_no(&self) -> &str {
        &self.student_reg_no
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    pub(crate) fn set_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }
}
