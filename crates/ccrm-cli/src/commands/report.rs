//! The `ccrm report` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use ccrm_core::report::GpaReport;

use super::Context;

pub fn execute(ctx: &Context, top: Option<usize>, format: String) -> Result<()> {
    let registry = ctx.store.load()?;
    let report = registry.gpa_report(top.unwrap_or(ctx.config.top_students));

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &GpaReport) {
    println!("--- GPA Distribution ---");
    if report.distribution.is_empty() {
        println!("No students registered.");
    }
    for (bucket, count) in &report.distribution {
        println!("GPA {bucket} : {count} students");
    }

    println!("\n--- Top Students ---");
    let mut table = Table::new();
    table.set_header(vec!["#", "RegNo", "Name", "GPA"]);
    for (rank, s) in report.top.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&s.reg_no),
            Cell::new(&s.full_name),
            Cell::new(format!("{:.2}", s.gpa)),
        ]);
    }
    println!("{table}");
}
