//! The `ccrm enroll` and `ccrm grade` commands.

use anyhow::Result;

use ccrm_core::engine::record_grade;

use super::{validate_marks, Context};

pub fn enroll(ctx: &Context, reg_no: String, code: String, marks: Option<f64>) -> Result<()> {
    let marks = marks.map(validate_marks).transpose()?;

    let grade = ctx.update(|registry| {
        let enrollment = registry.enroll(&reg_no, &code)?;
        Ok(marks.map(|m| record_grade(enrollment, m)))
    })?;

    match grade {
        Some(g) => println!("Enrolled {reg_no} in {code} Grade: {g}"),
        None => println!("Enrolled {reg_no} in {code}"),
    }
    Ok(())
}

pub fn grade(ctx: &Context, reg_no: String, code: String, marks: f64) -> Result<()> {
    let marks = validate_marks(marks)?;
    let grade = ctx.update(|registry| Ok(registry.record_grade(&reg_no, &code, marks)?))?;
    println!("{reg_no} {code} Grade: {grade} ({} points)", grade.points());
    Ok(())
}
