//! Transcript and GPA report types.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::gpa;
use crate::grade::Grade;
use crate::model::{Course, Student};
use crate::statistics::{gpa_distribution, top_students};

/// One course on a student's transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub course_code: String,
    /// `None` when the course is no longer in the catalog.
    pub course_title: Option<String>,
    pub credits: Option<u32>,
    /// `None` while the course is in progress.
    pub grade: Option<Grade>,
    pub enrolled_at: DateTime<Utc>,
}

/// All of a student's enrollments with their GPA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub reg_no: String,
    pub full_name: String,
    pub active: bool,
    /// Ordered by course code.
    pub lines: Vec<TranscriptLine>,
    pub gpa: f64,
}

impl Transcript {
    /// Build a transcript, resolving course details through `lookup`.
    pub fn build<'c>(student: &Student, lookup: impl Fn(&str) -> Option<&'c Course>) -> Self {
        let lines = student
            .enrollments()
            .values()
            .map(|e| {
                let course = lookup(e.course_code());
                TranscriptLine {
                    course_code: e.course_code().to_string(),
                    course_title: course.map(|c| c.title().to_string()),
                    credits: course.map(Course::credits),
                    grade: e.grade(),
                    enrolled_at: e.enrolled_at(),
                }
            })
            .collect();

        Self {
            reg_no: student.reg_no().to_string(),
            full_name: student.full_name().to_string(),
            active: student.is_active(),
            lines,
            gpa: gpa(student),
        }
    }

    /// Sum of credits over graded courses that are still in the catalog.
    pub fn earned_credits(&self) -> u32 {
        self.lines
            .iter()
            .filter(|l| l.grade.is_some_and(|g| g != Grade::F))
            .filter_map(|l| l.credits)
            .sum()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} Transcript ---", self.full_name)?;
        for line in &self.lines {
            let title = line.course_title.as_deref().unwrap_or("?");
            let grade = line
                .grade
                .map(|g| g.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(f, "{} | {} | Grade: {}", line.course_code, title, grade)?;
        }
        write!(f, "GPA: {:.2}", self.gpa)
    }
}

/// A student's position in the top-students list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStudent {
    pub reg_no: String,
    pub full_name: String,
    pub gpa: f64,
}

/// GPA distribution plus the top `n` students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaReport {
    /// Students per `floor(gpa)` bucket, ascending.
    pub distribution: BTreeMap<i64, usize>,
    pub top: Vec<RankedStudent>,
    pub student_count: usize,
}

impl GpaReport {
    pub fn compute(students: &[&Student], top_n: usize) -> Self {
        let top = top_students(students.iter().copied(), top_n)
            .into_iter()
            .map(|s| RankedStudent {
                reg_no: s.reg_no().to_string(),
                full_name: s.full_name().to_string(),
                gpa: gpa(s),
            })
            .collect();

        Self {
            distribution: gpa_distribution(students.iter().copied()),
            top,
            student_count: students.len(),
        }
    }
}
