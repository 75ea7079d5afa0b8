//! CLI output formatting for both subcommands.
//!
//! Progress goes to stdout; warnings and per-drive errors go to stderr so a
//! CI log can separate the two streams. Messages keep the exact phrasing the
//! site's deploy logs have always had — people grep these.
//!
//! Every stdout message has a pure `format_*` function (no I/O; a `String`
//! per line, `Vec<String>` for multi-line blocks) and a thin `print_*`
//! wrapper, so tests can assert on content without capturing stdout. The
//! stderr `warn_*` one-liners print directly.

use crate::songs::{DriveOutcome, RunSummary, SongsError};
use std::path::Path;

const BANNER_RULE: &str = "============================================================";

// ============================================================================
// songs: progress
// ============================================================================

/// Opening banner for a songs run.
pub fn format_banner() -> Vec<String> {
    vec![
        BANNER_RULE.to_string(),
        "Building songs JSON files from Google Drive".to_string(),
        BANNER_RULE.to_string(),
    ]
}

pub fn print_banner() {
    for line in format_banner() {
        println!("{line}");
    }
}

/// Config confirmation plus the drive tally.
pub fn format_config_loaded(path: &Path, drive_count: usize) -> Vec<String> {
    vec![
        format!("✓ Loaded configuration from {}", path.display()),
        format!("Found {drive_count} drive(s) to process"),
    ]
}

pub fn print_config_loaded(path: &Path, drive_count: usize) {
    for line in format_config_loaded(path, drive_count) {
        println!("{line}");
    }
}

pub fn format_authenticated() -> String {
    "✓ Successfully connected to Google Drive API".to_string()
}

pub fn print_authenticated() {
    println!("{}", format_authenticated());
}

/// Per-drive header: name, id, folder, output target.
pub fn format_drive_header(
    name: &str,
    drive_id: &str,
    folder_id: &str,
    output_file: &str,
) -> Vec<String> {
    vec![
        String::new(),
        format!("Processing drive: {name} ({drive_id})"),
        format!("  Folder ID: {folder_id}"),
        format!("  Output file: {output_file}"),
    ]
}

pub fn print_drive_header(name: &str, drive_id: &str, folder_id: &str, output_file: &str) {
    for line in format_drive_header(name, drive_id, folder_id, output_file) {
        println!("{line}");
    }
}

pub fn format_files_found(count: usize) -> String {
    format!("✓ Found {count} file(s)")
}

pub fn print_files_found(count: usize) {
    println!("{}", format_files_found(count));
}

pub fn format_manifest_written(count: usize, path: &Path) -> String {
    format!("✓ Successfully wrote {count} song(s) to {}", path.display())
}

pub fn print_manifest_written(count: usize, path: &Path) {
    println!("{}", format_manifest_written(count, path));
}

// ============================================================================
// songs: warnings and per-drive errors (stderr)
// ============================================================================

pub fn warn_drive_skipped(drive_id: &str, missing_var: &str) {
    eprintln!("Warning: {missing_var} not set, skipping {drive_id}");
}

pub fn warn_empty_folder(name: &str) {
    eprintln!("Warning: No PDF files found in folder for {name}");
}

pub fn warn_drive_failed(drive_id: &str, error: &SongsError) {
    eprintln!("Error processing {drive_id}: {error}");
    if let Some(hint) = error.hint() {
        eprintln!("  Hint: {hint}");
    }
}

pub fn warn_legacy_mode() {
    eprintln!(
        "⚠ Legacy DRIVE_FOLDER_ID detected - generating songs.json for backward compatibility"
    );
}

// ============================================================================
// songs: closing summary
// ============================================================================

/// Closing banner with per-drive tallies.
pub fn format_run_summary(summary: &RunSummary) -> Vec<String> {
    let mut written = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;
    for outcome in &summary.outcomes {
        match outcome {
            DriveOutcome::Written { .. } => written += 1,
            DriveOutcome::Skipped { .. } => skipped += 1,
            DriveOutcome::Failed { .. } => failed += 1,
        }
    }

    let mut tally = format!("{written} written, {skipped} skipped, {failed} failed");
    if let Some(legacy) = &summary.legacy {
        tally.push_str(&format!(
            ", legacy manifest: {} song(s)",
            legacy.songs
        ));
    }

    vec![
        String::new(),
        BANNER_RULE.to_string(),
        "✓ Successfully completed!".to_string(),
        tally,
        BANNER_RULE.to_string(),
    ]
}

pub fn print_run_summary(summary: &RunSummary) {
    for line in format_run_summary(summary) {
        println!("{line}");
    }
}

// ============================================================================
// brand-images
// ============================================================================

/// One line per written artifact plus a closing confirmation.
pub fn format_brand_output(paths: &[std::path::PathBuf]) -> Vec<String> {
    let mut lines: Vec<String> = paths
        .iter()
        .map(|p| format!("✓ Created {}", p.display()))
        .collect();
    lines.push(String::new());
    lines.push("All brand images created successfully!".to_string());
    lines
}

pub fn print_brand_output(paths: &[std::path::PathBuf]) {
    for line in format_brand_output(paths) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::songs::LegacyOutcome;
    use std::path::PathBuf;

    #[test]
    fn banner_is_three_lines() {
        let lines = format_banner();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[2]);
        assert!(lines[1].contains("Google Drive"));
    }

    #[test]
    fn config_loaded_reports_path_and_tally() {
        let lines = format_config_loaded(Path::new("site/config.json"), 2);
        assert_eq!(lines[0], "✓ Loaded configuration from site/config.json");
        assert_eq!(lines[1], "Found 2 drive(s) to process");
    }

    #[test]
    fn progress_one_liners_keep_the_deploy_log_phrasing() {
        assert_eq!(
            format_authenticated(),
            "✓ Successfully connected to Google Drive API"
        );
        assert_eq!(format_files_found(14), "✓ Found 14 file(s)");
        assert_eq!(
            format_manifest_written(14, Path::new("songs-main.json")),
            "✓ Successfully wrote 14 song(s) to songs-main.json"
        );
    }

    #[test]
    fn drive_header_lists_folder_and_output() {
        let lines = format_drive_header("Main Songbook", "main", "folder123", "songs-main.json");
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Processing drive: Main Songbook (main)");
        assert_eq!(lines[2], "  Folder ID: folder123");
        assert_eq!(lines[3], "  Output file: songs-main.json");
    }

    #[test]
    fn summary_tallies_outcomes() {
        let summary = RunSummary {
            outcomes: vec![
                DriveOutcome::Written {
                    drive_id: "a".into(),
                    output_file: "songs-a.json".into(),
                    songs: 3,
                },
                DriveOutcome::Skipped {
                    drive_id: "b".into(),
                    missing_var: "DRIVE_FOLDER_ID_B".into(),
                },
            ],
            legacy: None,
        };
        let lines = format_run_summary(&summary);
        assert!(lines.iter().any(|l| l == "1 written, 1 skipped, 0 failed"));
        assert!(lines.iter().any(|l| l.contains("Successfully completed")));
    }

    #[test]
    fn summary_mentions_legacy_pass() {
        let summary = RunSummary {
            outcomes: vec![],
            legacy: Some(LegacyOutcome {
                output_path: PathBuf::from("songs.json"),
                songs: 7,
            }),
        };
        let lines = format_run_summary(&summary);
        assert!(lines.iter().any(|l| l.contains("legacy manifest: 7 song(s)")));
    }

    #[test]
    fn brand_output_lists_each_artifact() {
        let paths = vec![
            PathBuf::from("images/big-logo.png"),
            PathBuf::from("images/ukulele-icon.png"),
        ];
        let lines = format_brand_output(&paths);
        assert_eq!(lines[0], "✓ Created images/big-logo.png");
        assert_eq!(lines[1], "✓ Created images/ukulele-icon.png");
        assert!(lines.last().unwrap().contains("successfully"));
    }
}
