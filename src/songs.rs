//! Multi-drive orchestration for the `songs` subcommand.
//!
//! Runs the fetch → transform → sort → write pipeline once per configured
//! drive, then once more in legacy single-folder mode if `DRIVE_FOLDER_ID`
//! is set.
//!
//! ## Failure isolation
//!
//! The loop treats each drive as its own blast radius:
//!
//! - A drive whose `DRIVE_FOLDER_ID_<ID>` variable is unset is **skipped**
//!   with a warning. Nothing is written, so a stale manifest from an earlier
//!   deploy survives untouched.
//! - A drive that fails mid-pipeline (API error, unwritable output) is
//!   logged and the loop **continues** with the remaining drives.
//! - Legacy mode has no such isolation: it is the last step of the run and
//!   its errors are fatal, matching the single-folder contract the site
//!   started with.
//!
//! Every run reports a [`RunSummary`] so the caller can render a closing
//! status without re-deriving it from side effects.

use crate::config::{DEFAULT_OUTPUT_PATH, DriveConfig, EnvLookup, LEGACY_FOLDER_VAR, LEGACY_OUTPUT_VAR, SiteConfig};
use crate::drive::{DriveError, FileLister};
use crate::manifest::{self, ManifestError};
use crate::output;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongsError {
    #[error(transparent)]
    Drive(#[from] DriveError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl SongsError {
    /// Pass through the Drive hint, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SongsError::Drive(e) => e.hint(),
            SongsError::Manifest(_) => None,
        }
    }
}

/// What happened to one configured drive.
#[derive(Debug)]
pub enum DriveOutcome {
    Written {
        drive_id: String,
        output_file: String,
        songs: usize,
    },
    Skipped {
        drive_id: String,
        missing_var: String,
    },
    Failed {
        drive_id: String,
        error: SongsError,
    },
}

/// Result of legacy single-folder mode.
#[derive(Debug)]
pub struct LegacyOutcome {
    pub output_path: PathBuf,
    pub songs: usize,
}

/// Full run report: one outcome per configured drive, plus the legacy pass.
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<DriveOutcome>,
    pub legacy: Option<LegacyOutcome>,
}

/// Process every configured drive, then legacy mode if requested.
///
/// Per-drive failures are captured in the summary; only legacy-mode failures
/// propagate as `Err`.
pub fn run(
    site: &SiteConfig,
    lister: &dyn FileLister,
    env: EnvLookup,
) -> Result<RunSummary, SongsError> {
    let mut outcomes = Vec::with_capacity(site.drives.len());

    for drive in &site.drives {
        let var = drive.folder_id_var();
        let Some(folder_id) = env(&var) else {
            output::warn_drive_skipped(&drive.id, &var);
            outcomes.push(DriveOutcome::Skipped {
                drive_id: drive.id.clone(),
                missing_var: var,
            });
            continue;
        };

        match process_drive(drive, &folder_id, lister) {
            Ok(songs) => outcomes.push(DriveOutcome::Written {
                drive_id: drive.id.clone(),
                output_file: drive.output_file(),
                songs,
            }),
            Err(error) => {
                output::warn_drive_failed(&drive.id, &error);
                outcomes.push(DriveOutcome::Failed {
                    drive_id: drive.id.clone(),
                    error,
                });
            }
        }
    }

    let legacy = match env(LEGACY_FOLDER_VAR) {
        Some(folder_id) => Some(run_legacy(&folder_id, lister, env)?),
        None => None,
    };

    Ok(RunSummary { outcomes, legacy })
}

/// One drive, end to end: list, transform, sort, write.
fn process_drive(
    drive: &DriveConfig,
    folder_id: &str,
    lister: &dyn FileLister,
) -> Result<usize, SongsError> {
    let output_file = drive.output_file();
    output::print_drive_header(&drive.name, &drive.id, folder_id, &output_file);

    let files = lister.list_pdfs(folder_id)?;
    output::print_files_found(files.len());
    if files.is_empty() {
        output::warn_empty_folder(&drive.name);
    }

    let songs = manifest::build_songs(&files);
    let path = PathBuf::from(output_file);
    manifest::write_manifest(&songs, &path)?;
    output::print_manifest_written(songs.len(), &path);
    Ok(songs.len())
}

/// Legacy single-folder mode: the original one-manifest contract, kept for
/// deployments that never migrated to `config.json`.
fn run_legacy(
    folder_id: &str,
    lister: &dyn FileLister,
    env: EnvLookup,
) -> Result<LegacyOutcome, SongsError> {
    output::warn_legacy_mode();
    let output_path = PathBuf::from(
        env(LEGACY_OUTPUT_VAR).unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
    );

    let files = lister.list_pdfs(folder_id)?;
    output::print_files_found(files.len());
    if files.is_empty() {
        output::warn_empty_folder("legacy folder");
    }

    let songs = manifest::build_songs(&files);
    manifest::write_manifest(&songs, &output_path)?;
    output::print_manifest_written(songs.len(), &output_path);
    Ok(LegacyOutcome {
        output_path,
        songs: songs.len(),
    })
}
