use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use perya_game::{COLOR_COUNT, Color, ProfitSummary};

/// One simulated batch: a variant at a seed plus its aggregate statistics.
#[derive(Debug, Clone, Serialize)]
pub struct VariantRun {
    pub variant_id: String,
    pub variant_name: String,
    pub seed: u64,
    pub plays: usize,
    pub bet: f64,
    /// Closed-form expected profit per round for this variant.
    pub expected_mean: f64,
    pub summary: ProfitSummary,
    pub face_counts: [usize; COLOR_COUNT],
    /// Running profit series, the data behind the dashboard's line chart.
    pub cumulative: Vec<f64>,
}

pub fn generate_console_report(writer: &mut dyn Write, runs: &[VariantRun]) -> Result<()> {
    writeln!(writer, "{}", "📊 Simulation Results".bright_cyan().bold())?;
    writeln!(writer, "{}", "=====================".cyan())?;

    for run in runs {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} ({}) [seed {}]",
            run.variant_name.bold(),
            run.variant_id,
            run.seed
        )?;
        writeln!(writer, "  Plays: {}   Bet: ${:.2}", run.plays, run.bet)?;
        writeln!(writer, "  Win rate: {:.2}%", run.summary.win_rate * 100.0)?;

        let mean_label = format!("${:.4}", run.summary.mean);
        let mean_colored = if run.summary.mean >= 0.0 {
            mean_label.green()
        } else {
            mean_label.red()
        };
        writeln!(
            writer,
            "  Mean profit/play: {mean_colored}   (expected ${:.4})",
            run.expected_mean
        )?;
        writeln!(writer, "  Std dev: ${:.4}", run.summary.std_dev)?;
        writeln!(writer, "  House edge: {:.4}%", run.summary.house_edge * 100.0)?;
        writeln!(writer, "  Total profit: ${:.2}", run.summary.total)?;
        writeln!(writer, "  Faces: {}", format_face_counts(run))?;
    }

    Ok(())
}

pub fn generate_json_report(writer: &mut dyn Write, runs: &[VariantRun]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, runs)?;
    writeln!(writer)?;
    Ok(())
}

pub fn generate_csv_report(writer: &mut dyn Write, runs: &[VariantRun]) -> Result<()> {
    writeln!(
        writer,
        "variant,seed,plays,bet,total,mean,std_dev,win_rate,house_edge,expected_mean"
    )?;
    for run in runs {
        writeln!(
            writer,
            "{},{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            run.variant_id,
            run.seed,
            run.plays,
            run.bet,
            run.summary.total,
            run.summary.mean,
            run.summary.std_dev,
            run.summary.win_rate,
            run.summary.house_edge,
            run.expected_mean,
        )?;
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn format_face_counts(run: &VariantRun) -> String {
    let total: usize = run.face_counts.iter().sum();
    let denom = if total == 0 { 1.0 } else { total as f64 };
    let parts: Vec<String> = Color::ALL
        .iter()
        .zip(run.face_counts)
        .map(|(color, count)| format!("{color} {:.1}%", count as f64 / denom * 100.0))
        .collect();
    parts.join(" | ")
}
