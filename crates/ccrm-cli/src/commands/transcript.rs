//! The `ccrm transcript` command.

use anyhow::Result;

use super::Context;

pub fn execute(ctx: &Context, reg_no: Option<String>, format: String) -> Result<()> {
    let registry = ctx.store.load()?;

    let transcripts = match reg_no {
        Some(reg_no) => vec![registry.transcript(&reg_no)?],
        None => registry.transcripts(),
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&transcripts)?);
        }
        _ => {
            if transcripts.is_empty() {
                println!("No students registered.");
            }
            for t in &transcripts {
                println!("\n{t}");
                println!("Credits earned: {}", t.earned_credits());
            }
        }
    }
    Ok(())
}
