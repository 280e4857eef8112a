//! Output formatting utilities

use crate::application::PatchReport;

/// Format a patch report for display
pub fn format_report(report: &PatchReport) -> String {
    // Reports use one-based line numbers.
    let line = report.index + 1;

    if report.dry_run {
        let mut output = format!(
            "Dry run: would insert {} lines into {} at line {}\n",
            report.inserted,
            report.path.display(),
            line
        );
        output.push_str(&format!(
            "Lines: {} -> {}\n",
            report.lines_before, report.lines_after
        ));
        return output;
    }

    let mut output = format!("SUCCESS: Inserted {} lines\n", report.inserted);
    output.push_str(&format!("Target: {} (line {})\n", report.path.display(), line));
    if report.clamped {
        output.push_str("Note: file was shorter than the insertion point; block appended at end\n");
    }
    if let Some(backup) = &report.backup {
        output.push_str(&format!("Backup: {}\n", backup.display()));
    }
    output
}
