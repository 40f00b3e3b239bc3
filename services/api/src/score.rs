use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{parse_receipt, score, PointsBreakdown};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    #[arg(long)]
    pub(crate) receipt: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.receipt)?;
    let breakdown = score_document(&raw)?;
    print!("{}", render_breakdown(&breakdown));
    Ok(())
}

fn score_document(raw: &str) -> Result<PointsBreakdown, AppError> {
    let document: serde_json::Value = serde_json::from_str(raw)?;
    let receipt = parse_receipt(&document)?;
    Ok(score(&receipt)?)
}

fn render_breakdown(breakdown: &PointsBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Receipt points");
    for component in &breakdown.components {
        let _ = writeln!(
            out,
            "- {}: {} ({})",
            component.rule.label(),
            component.points,
            component.notes
        );
    }
    let _ = writeln!(out, "Total: {}", breakdown.total);
    out
}
