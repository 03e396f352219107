//! Table formatting for the manifest.

use std::fmt::Write;

use biodl_core::{DownloadOutcome, Manifest, ManifestSummary};

/// Widest detail column before truncation.
const DETAIL_WIDTH: usize = 96;

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use biodl_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

fn detail(outcome: &DownloadOutcome) -> String {
    match outcome {
        DownloadOutcome::Written { path, bytes } => format!("{} ({bytes} bytes)", path.display()),
        DownloadOutcome::Skipped { path } => format!("{} (already present)", path.display()),
        DownloadOutcome::Failed { error } => error.user_message(),
    }
}

// e.g. `2 written, 1 skipped, 0 failed`
fn summary_line(summary: &ManifestSummary) -> String {
    format!(
        "{} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    )
}

/// Render the manifest as an aligned text table followed by a summary line.
pub fn manifest_table(manifest: &Manifest) -> String {
    let rows: Vec<[String; 4]> = manifest
        .entries()
        .iter()
        .map(|entry| {
            [
                entry.identifier.to_string(),
                entry.format.to_string(),
                entry.outcome.label().to_string(),
                truncate_string(&detail(&entry.outcome), DETAIL_WIDTH),
            ]
        })
        .collect();

    let header = ["IDENTIFIER", "FORMAT", "STATUS", "DETAIL"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: [&str; 4]| {
        let _ = writeln!(
            out,
            "{:<w0$}  {:<w1$}  {:<w2$}  {}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        );
    };

    line(header);
    for row in &rows {
        line([&row[0], &row[1], &row[2], &row[3]]);
    }

    let total_width = widths.iter().sum::<usize>() + 6;
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    out.push_str(&summary_line(&manifest.summary()));
    out.push('\n');
    out
}
