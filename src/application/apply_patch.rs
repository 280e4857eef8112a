//! Apply-patch use case

use crate::domain::{cp1252, DashboardPatch, FileLines};
use crate::error::{PatchError, Result};
use crate::infrastructure::TargetFile;
use chrono::Local;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    pub dry_run: bool,
    pub force: bool,
    pub backup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub lines_before: usize,
    pub lines_after: usize,
    pub inserted: usize,
    /// Zero-based index where the block actually landed.
    pub index: usize,
    pub clamped: bool,
    pub dry_run: bool,
    pub backup: Option<PathBuf>,
}

/// Splice the patch payload into the target and rewrite it as cp1252.
pub fn apply_patch(
    target: &TargetFile,
    patch: &DashboardPatch,
    options: PatchOptions,
) -> Result<PatchReport> {
    let original = target.read_bytes()?;
    let text = cp1252::decode(&original)?;
    let mut lines = FileLines::parse(&text);
    let lines_before = lines.len();
    debug!(
        bytes = original.len(),
        lines = lines_before,
        "decoded target as cp1252"
    );

    if !options.force {
        if let Some(index) = applied_at(&lines, patch) {
            return Err(PatchError::AlreadyApplied {
                path: target.path().to_path_buf(),
                index,
            });
        }
    }

    let index = lines.insert_block(patch.index(), patch.lines());
    let clamped = index != patch.index();
    if clamped {
        warn!(
            requested = patch.index(),
            used = index,
            "target is shorter than the insertion point; appending at end of file"
        );
    }
    debug!(index, inserted = patch.lines().len(), "spliced payload");

    // Encode before touching the disk so an unmappable character leaves the target intact.
    let encoded = cp1252::encode(&lines.render())?;

    let mut report = PatchReport {
        path: target.path().to_path_buf(),
        lines_before,
        lines_after: lines.len(),
        inserted: patch.lines().len(),
        index,
        clamped,
        dry_run: options.dry_run,
        backup: None,
    };

    if options.dry_run {
        return Ok(report);
    }

    if options.backup {
        let stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
        report.backup = Some(target.backup(&stamp)?);
    }

    target.write_bytes_atomic(&encoded)?;

    Ok(report)
}

/// Where an earlier run would have left the payload, if it is there.
///
/// A short file gets the block appended, so besides the fixed index this also
/// checks the position the block takes when it ends the file.
fn applied_at(lines: &FileLines, patch: &DashboardPatch) -> Option<usize> {
    let block_len = patch.lines().len();
    let appended = lines.len().checked_sub(block_len)?;

    [patch.index(), patch.index().min(appended)]
        .into_iter()
        .find(|&index| lines.block_at(index, patch.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PAYLOAD_LINES;
    use std::fs;
    use tempfile::TempDir;

    fn numbered(count: usize, eol: &str) -> String {
        (1..=count).map(|n| format!("line {}{}", n, eol)).collect()
    }

    fn setup(content: &[u8]) -> (TempDir, TargetFile) {
        let temp = TempDir::new().unwrap();
        let target = TargetFile::new(temp.path().to_path_buf(), &DashboardPatch::fixed());
        fs::create_dir_all(target.path().parent().unwrap()).unwrap();
        fs::write(target.path(), content).unwrap();
        (temp, target)
    }

    #[test]
    fn inserts_after_line_522() {
        let (_temp, target) = setup(numbered(600, "\n").as_bytes());

        let report =
            apply_patch(&target, &DashboardPatch::fixed(), PatchOptions::default()).unwrap();

        assert_eq!(report.lines_before, 600);
        assert_eq!(report.lines_after, 656);
        assert_eq!(report.inserted, 56);
        assert_eq!(report.index, 522);
        assert!(!report.clamped);

        let written = fs::read_to_string(target.path()).unwrap();
        let lines = FileLines::parse(&written);
        assert_eq!(lines.lines()[521], "line 522\n");
        assert!(lines.block_at(522, &PAYLOAD_LINES));
        assert_eq!(lines.lines()[578], "line 523\n");
    }

    #[test]
    fn preserves_crlf_and_latin_bytes() {
        let mut content = numbered(530, "\r\n").into_bytes();
        content.extend_from_slice(b"// caf\xe9 \x80\r\n");
        let (_temp, target) = setup(&content);

        apply_patch(&target, &DashboardPatch::fixed(), PatchOptions::default()).unwrap();

        let written = fs::read(target.path()).unwrap();
        assert!(written.ends_with(b"// caf\xe9 \x80\r\n"));
        assert!(written.starts_with(numbered(522, "\r\n").as_bytes()));
        assert_eq!(written.len(), content.len() + PAYLOAD_LINES.concat().len());
    }

    #[test]
    fn second_run_is_refused() {
        let (_temp, target) = setup(numbered(600, "\n").as_bytes());
        let patch = DashboardPatch::fixed();

        apply_patch(&target, &patch, PatchOptions::default()).unwrap();
        let once = fs::read(target.path()).unwrap();

        match apply_patch(&target, &patch, PatchOptions::default()).unwrap_err() {
            PatchError::AlreadyApplied { index, .. } => assert_eq!(index, 522),
            other => panic!("Expected AlreadyApplied, got {:?}", other),
        }
        assert_eq!(fs::read(target.path()).unwrap(), once);
    }

    #[test]
    fn force_inserts_again() {
        let (_temp, target) = setup(numbered(600, "\n").as_bytes());
        let patch = DashboardPatch::fixed();
        let options = PatchOptions {
            force: true,
            ..PatchOptions::default()
        };

        apply_patch(&target, &patch, PatchOptions::default()).unwrap();
        let report = apply_patch(&target, &patch, options).unwrap();

        assert_eq!(report.lines_before, 656);
        assert_eq!(report.lines_after, 712);
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let content = numbered(600, "\n");
        let (_temp, target) = setup(content.as_bytes());
        let options = PatchOptions {
            dry_run: true,
            ..PatchOptions::default()
        };

        let report = apply_patch(&target, &DashboardPatch::fixed(), options).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.lines_after, 656);
        assert_eq!(fs::read_to_string(target.path()).unwrap(), content);
    }

    #[test]
    fn short_file_gets_block_appended() {
        let (_temp, target) = setup(numbered(10, "\n").as_bytes());

        let report =
            apply_patch(&target, &DashboardPatch::fixed(), PatchOptions::default()).unwrap();

        assert!(report.clamped);
        assert_eq!(report.index, 10);
        let written = fs::read_to_string(target.path()).unwrap();
        assert!(written.starts_with(&numbered(10, "\n")));
        assert!(written.ends_with(&PAYLOAD_LINES.concat()));
    }

    #[test]
    fn second_run_on_short_file_is_refused() {
        let (_temp, target) = setup(numbered(10, "\n").as_bytes());
        let patch = DashboardPatch::fixed();

        apply_patch(&target, &patch, PatchOptions::default()).unwrap();
        let once = fs::read(target.path()).unwrap();

        match apply_patch(&target, &patch, PatchOptions::default()).unwrap_err() {
            PatchError::AlreadyApplied { index, .. } => assert_eq!(index, 10),
            other => panic!("Expected AlreadyApplied, got {:?}", other),
        }
        assert_eq!(fs::read(target.path()).unwrap(), once);
    }

    #[test]
    fn applied_at_ignores_files_shorter_than_block() {
        let lines = FileLines::parse(&numbered(5, "\n"));
        assert_eq!(applied_at(&lines, &DashboardPatch::fixed()), None);
    }

    #[test]
    fn backup_keeps_original_bytes() {
        let content = numbered(600, "\n");
        let (_temp, target) = setup(content.as_bytes());
        let options = PatchOptions {
            backup: true,
            ..PatchOptions::default()
        };

        let report = apply_patch(&target, &DashboardPatch::fixed(), options).unwrap();

        let backup = report.backup.expect("backup path");
        assert_eq!(fs::read_to_string(backup).unwrap(), content);
        assert_ne!(fs::read_to_string(target.path()).unwrap(), content);
    }

    #[test]
    fn undecodable_target_is_not_rewritten() {
        let mut content = numbered(600, "\n").into_bytes();
        content.push(0x81);
        let (_temp, target) = setup(&content);

        let err = apply_patch(&target, &DashboardPatch::fixed(), PatchOptions::default())
            .unwrap_err();

        assert!(matches!(err, PatchError::Decode { byte: 0x81, .. }));
        assert_eq!(fs::read(target.path()).unwrap(), content);
    }

    #[test]
    fn missing_target_reports_path() {
        let temp = TempDir::new().unwrap();
        let target = TargetFile::new(temp.path().to_path_buf(), &DashboardPatch::fixed());

        let err = apply_patch(&target, &DashboardPatch::fixed(), PatchOptions::default())
            .unwrap_err();

        assert!(matches!(err, PatchError::TargetNotFound(_)));
    }
}
