//! CLI output: error mapping and outcome formatting for the stable CLI
//! surface.

use crate::error::AppError;
use crate::generate::{CheckOutcome, CheckStatus, GenerateOutcome};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Map domain errors to a string for CLI output.
/// Keeps route handlers thin; extend with stable categories if needed.
pub fn map_error(e: &AppError) -> String {
    e.to_string()
}

fn short_digest(digest: &str) -> &str {
    &digest[..digest.len().min(12)]
}

/// Format a generate outcome as text or pretty JSON.
pub fn format_generate_outcome(
    outcome: &GenerateOutcome,
    format: &str,
) -> Result<String, AppError> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    let mut s = if outcome.dry_run {
        format!(
            "{} Index preview (dry run): {}",
            "~".yellow(),
            outcome.output_path.display()
        )
    } else {
        format!(
            "{} Index written: {}",
            "✓".green(),
            outcome.output_path.display()
        )
    };
    s.push_str(&format!(
        "\n  {} folders, {} entries, {} bytes (blake3 {})",
        outcome.folders.len(),
        outcome.entry_count,
        outcome.bytes,
        short_digest(&outcome.digest)
    ));

    if !outcome.folders.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Folder", "Entries"]);
        for folder in &outcome.folders {
            table.add_row(vec![folder.name.clone(), folder.entries.to_string()]);
        }
        s.push('\n');
        s.push_str(&table.to_string());
    }

    Ok(s)
}

/// Format a check outcome as text or pretty JSON.
pub fn format_check_outcome(outcome: &CheckOutcome, format: &str) -> Result<String, AppError> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    let mut s = match outcome.status {
        CheckStatus::InSync => format!(
            "{} Index up to date: {}",
            "✓".green(),
            outcome.output_path.display()
        ),
        CheckStatus::Stale => format!(
            "{} Index out of date: {}",
            "✗".red(),
            outcome.output_path.display()
        ),
        CheckStatus::Missing => format!(
            "{} Index missing: {}",
            "✗".red(),
            outcome.output_path.display()
        ),
    };
    s.push_str(&format!(
        "\n  expected blake3 {}",
        short_digest(&outcome.expected_digest)
    ));
    if let Some(actual) = &outcome.actual_digest {
        s.push_str(&format!(", on disk {}", short_digest(actual)));
    }

    Ok(s)
}
