//! Commands that create, update and list records.

use anyhow::{Context as _, Result};
use comfy_table::{Cell, Table};
use uuid::Uuid;

use ccrm_core::engine::gpa;
use ccrm_core::model::{Course, Instructor, Profile, Semester, Student};

use super::Context;

pub fn add_student(
    ctx: &Context,
    reg_no: String,
    name: String,
    email: String,
    id: Option<String>,
) -> Result<()> {
    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let student = Student::new(id, reg_no, name, email);
    let profile = student.profile();

    let replaced = ctx.update(|registry| Ok(registry.add_student(student)))?;
    if let Some(old) = replaced {
        tracing::warn!("replaced existing student {}", old.reg_no());
    }
    println!("Added {profile}");
    Ok(())
}

pub fn add_instructor(
    ctx: &Context,
    id: String,
    name: String,
    email: String,
    emp_id: String,
    department: String,
) -> Result<()> {
    let instructor = Instructor::new(id, name, email, emp_id, department);
    let profile = instructor.profile();
    ctx.update(|registry| Ok(registry.add_instructor(instructor)))?;
    println!("Added {profile}");
    Ok(())
}

pub fn add_course(
    ctx: &Context,
    code: String,
    title: String,
    credits: u32,
    semester: String,
    department: String,
    instructor: Option<String>,
) -> Result<()> {
    let semester: Semester = semester.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let mut builder = Course::builder()
        .code(code)
        .title(title)
        .credits(credits)
        .semester(semester)
        .department(department);
    if let Some(id) = instructor {
        builder = builder.instructor(id);
    }
    let course = builder.build()?;

    let summary = course.to_string();
    ctx.update(|registry| {
        if let Some(id) = course.instructor_id() {
            if registry.instructor(id).is_none() {
                tracing::warn!("course {} references unknown instructor {id}", course.code());
            }
        }
        Ok(registry.add_course(course))
    })?;
    println!("Added {summary}");
    Ok(())
}

pub fn set_active(ctx: &Context, reg_no: String, active: bool) -> Result<()> {
    ctx.update(|registry| {
        registry
            .set_active(&reg_no, active)
            .with_context(|| format!("cannot update {reg_no}"))
    })?;
    println!("{reg_no} active: {active}");
    Ok(())
}

pub fn list(ctx: &Context, kind: String) -> Result<()> {
    let registry = ctx.store.load()?;

    let mut table = Table::new();
    match kind.as_str() {
        "students" => {
            table.set_header(vec!["RegNo", "Name", "Email", "Active", "Courses", "GPA"]);
            for s in registry.students() {
                table.add_row(vec![
                    Cell::new(s.reg_no()),
                    Cell::new(s.full_name()),
                    Cell::new(s.email()),
                    Cell::new(s.is_active()),
                    Cell::new(s.enrollments().len()),
                    Cell::new(format!("{:.2}", gpa(s))),
                ]);
            }
        }
        "courses" => {
            table.set_header(vec![
                "Code",
                "Title",
                "Credits",
                "Semester",
                "Department",
                "Instructor",
            ]);
            for c in registry.courses() {
                let instructor = c
                    .instructor_id()
                    .map(|id| match registry.instructor(id) {
                        Some(i) => i.profile(),
                        None => id.to_string(),
                    })
                    .unwrap_or_default();
                table.add_row(vec![
                    Cell::new(c.code()),
                    Cell::new(c.title()),
                    Cell::new(c.credits()),
                    Cell::new(c.semester()),
                    Cell::new(c.department()),
                    Cell::new(instructor),
                ]);
            }
        }
        "instructors" => {
            table.set_header(vec!["Id", "EmpId", "Profile"]);
            for i in registry.instructors() {
                table.add_row(vec![
                    Cell::new(i.id()),
                    Cell::new(i.emp_id()),
                    Cell::new(i.profile()),
                ]);
            }
        }
        other => {
            anyhow::bail!(
                "unknown record kind: {other} (expected students, courses or instructors)"
            )
        }
    }

    println!("{table}");
    Ok(())
}
