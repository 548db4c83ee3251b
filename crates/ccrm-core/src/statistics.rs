//! Aggregate GPA statistics across a set of students.

use std::collections::BTreeMap;

use crate::engine::gpa;
use crate::model::Student;

/// Number of students in the standard "top students" report.
pub const DEFAULT_TOP_N: usize = 5;

/// Count students per whole-number GPA bucket (`floor(gpa)`).
///
/// Only buckets holding at least one student appear. Iteration is in
/// ascending bucket order.
pub fn gpa_distribution<'a>(
    students: impl IntoIterator<Item = &'a Student>,
) -> BTreeMap<i64, usize> {
    let mut buckets = BTreeMap::new();
    for student in students {
        *buckets.entry(gpa(student).floor() as i64).or_insert(0) += 1;
    }
    buckets
}

/// The `n` students with the highest GPA, best first.
///
/// The sort is stable: students with equal GPA keep the order in which the
/// caller supplied them.
pub fn top_students<'a>(
    students: impl IntoIterator<Item = &'a Student>,
    n: usize,
) -> Vec<&'a Student> {
    let mut ranked: Vec<(&Student, f64)> = students.into_iter().map(|s| (s, gpa(s))).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(n).map(|(s, _)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{enroll, record_grade};
    use crate::model::Course;

    /// A student with one enrollment per mark; `None` leaves it ungraded.
    fn student_with_marks(reg_no: &str, marks: &[Option<f64>]) -> Student {
        let mut student =
            Student::new(reg_no, reg_no, format!("Student {reg_no}"), "s@example.edu");
        for (i, mark) in marks.iter().enumerate() {
            let course = Course::builder()
                .code(format!("C{i}"))
                .title(format!("Course {i}"))
                .build()
                .unwrap();
            let enrollment = enroll(&mut student, &course).unwrap();
            if let Some(m) = mark {
                record_grade(enrollment, *m);
            }
        }
        student
    }

    /// `whole` S grades out of 10 enrollments gives a GPA of exactly `whole`.
    fn student_with_gpa(reg_no: &str, whole: usize) -> Student {
        let marks: Vec<Option<f64>> = (0..10)
            .map(|i| if i < whole { Some(95.0) } else { None })
            .collect();
        student_with_marks(reg_no, &marks)
    }

    #[test]
    fn distribution_floors_gpa() {
        // 16/5 = 3.2
        let a = student_with_marks("a", &[Some(90.0), Some(50.0), Some(0.0), Some(0.0), None]);
        // 39/10 = 3.9
        let mut b_marks = vec![Some(90.0), Some(90.0), Some(90.0), Some(80.0)];
        b_marks.resize(10, Some(0.0));
        let b = student_with_marks("b", &b_marks);
        // 71/10 = 7.1
        let c = student_with_marks(
            "c",
            &[
                Some(90.0),
                Some(90.0),
                Some(90.0),
                Some(90.0),
                Some(90.0),
                Some(80.0),
                Some(50.0),
                Some(50.0),
                None,
                None,
            ],
        );
        assert!((gpa(&a) - 3.2).abs() < 1e-9);
        assert!((gpa(&b) - 3.9).abs() < 1e-9);
        assert!((gpa(&c) - 7.1).abs() < 1e-9);

        let dist = gpa_distribution([&a, &b, &c]);
        assert_eq!(dist, BTreeMap::from([(3, 2), (7, 1)]));
    }

    #[test]
    fn distribution_is_ascending_and_empty_for_no_students() {
        let students: Vec<Student> = [9, 0, 4, 4]
            .iter()
            .enumerate()
            .map(|(i, g)| student_with_gpa(&i.to_string(), *g))
            .collect();
        let keys: Vec<i64> = gpa_distribution(&students).into_keys().collect();
        assert_eq!(keys, vec![0, 4, 9]);

        assert!(gpa_distribution(std::iter::empty::<&Student>()).is_empty());
    }

    #[test]
    fn top_five_of_ten_distinct() {
        let order = [3, 7, 0, 9, 5, 1, 8, 2, 6, 4];
        let students: Vec<Student> = order
            .iter()
            .map(|g| student_with_gpa(&format!("R{g}"), *g))
            .collect();

        let top = top_students(&students, DEFAULT_TOP_N);
        let regs: Vec<&str> = top.iter().map(|s| s.reg_no()).collect();
        assert_eq!(regs, vec!["R9", "R8", "R7", "R6", "R5"]);
    }

    #[test]
    fn top_students_ties_keep_input_order() {
        let students = vec![
            student_with_gpa("first", 4),
            student_with_gpa("best", 8),
            student_with_gpa("second", 4),
            student_with_gpa("third", 4),
        ];
        let top = top_students(&students, 3);
        let regs: Vec<&str> = top.iter().map(|s| s.reg_no()).collect();
        assert_eq!(regs, vec!["best", "first", "second"]);
    }

    #[test]
    fn top_students_with_n_larger_than_input() {
        let students = vec![student_with_gpa("a", 1), student_with_gpa("b", 2)];
        assert_eq!(top_students(&students, 10).len(), 2);
        assert!(top_students(&students, 0).is_empty());
    }
}
