//! The `ccrm import` and `ccrm export` commands.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use ccrm_core::codec;

use super::Context;

pub fn import(ctx: &Context, students: Option<PathBuf>, courses: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(
        students.is_some() || courses.is_some(),
        "nothing to import: pass --students and/or --courses"
    );

    let mut registry = ctx.store.load()?;

    // Rows read before a failure stay in the registry and are saved anyway.
    let outcome = (|| -> Result<(usize, usize)> {
        let mut student_count = 0;
        let mut course_count = 0;
        if let Some(path) = &students {
            student_count = codec::import_students(path, &mut registry)
                .with_context(|| format!("failed to import students from {}", path.display()))?;
        }
        if let Some(path) = &courses {
            course_count = codec::import_courses(path, &mut registry)
                .with_context(|| format!("failed to import courses from {}", path.display()))?;
        }
        Ok((student_count, course_count))
    })();

    ctx.store.save(&registry)?;
    let (student_count, course_count) = outcome?;

    println!("Imported {student_count} students and {course_count} courses.");
    Ok(())
}

pub fn export(ctx: &Context, students: Option<PathBuf>, courses: Option<PathBuf>) -> Result<()> {
    let registry = ctx.store.load()?;

    let students_path = students.unwrap_or_else(|| ctx.config.students_export.clone());
    let courses_path = courses.unwrap_or_else(|| ctx.config.courses_export.clone());

    let student_count = codec::export_students(&students_path, registry.students())
        .with_context(|| format!("failed to export students to {}", students_path.display()))?;
    let course_count = codec::export_courses(&courses_path, registry.courses())
        .with_context(|| format!("failed to export courses to {}", courses_path.display()))?;

    println!(
        "Exported {student_count} students to {} and {course_count} courses to {}",
        students_path.display(),
        courses_path.display()
    );
    Ok(())
}
