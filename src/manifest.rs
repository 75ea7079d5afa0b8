//! Song manifest schema, transformation, and serialization.
//!
//! The website's client-side script consumes a flat JSON array:
//!
//! ```json
//! [
//!   { "id": 1, "name": "apple", "pdfUrl": "https://..." },
//!   { "id": 2, "name": "Zebra", "pdfUrl": "https://..." }
//! ]
//! ```
//!
//! ## Ordering contract
//!
//! Output order and ids are a pure function of the file *names*: entries are
//! stable-sorted by lowercased name ascending (ties keep API order), then ids
//! are reassigned `1..=N`. Drive returns folder listings in whatever order it
//! pleases, so two runs against an unchanged folder must still produce
//! byte-identical manifests — ids are positional, never stable keys.
//!
//! ## Name derivation
//!
//! A trailing `.pdf` is stripped case-insensitively, exactly the last four
//! characters: `Amazing Grace.PDF` → `Amazing Grace`, but `set.pdf.pdf` →
//! `set.pdf` and `notes.pdfx` is untouched.

use crate::drive::DriveFile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One song entry in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// 1-based position after sorting. Reassigned every run.
    pub id: u32,
    /// Filename with the trailing `.pdf` stripped.
    pub name: String,
    /// Direct-download link for the PDF.
    #[serde(rename = "pdfUrl")]
    pub pdf_url: String,
}

/// Direct-download URL for a Drive file.
///
/// The site historically also used a folder-view style
/// (`drive.google.com/file/d/<id>/view`); the download form is what the
/// current client script expects. Single construction point so a deployment
/// can swap styles in one place.
pub fn pdf_url(file_id: &str) -> String {
    format!("https://drive.usercontent.google.com/u/0/uc?id={file_id}&export=download")
}

/// Strip a trailing `.pdf` suffix, case-insensitively.
///
/// Removes exactly the last four characters when they spell `.pdf` in any
/// case. Applied once, so `set.pdf.pdf` keeps its inner suffix.
pub fn strip_pdf_suffix(name: &str) -> &str {
    if name.len() < 4 {
        return name;
    }
    let split = name.len() - 4;
    match name.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(".pdf") => &name[..split],
        _ => name,
    }
}

/// Transform a folder listing into the final, sorted, renumbered manifest.
///
/// Provisional ids follow input order and are discarded by the renumbering
/// pass; only the name sort decides the final sequence.
pub fn build_songs(files: &[DriveFile]) -> Vec<Song> {
    let mut songs: Vec<Song> = files
        .iter()
        .enumerate()
        .map(|(idx, file)| Song {
            id: idx as u32 + 1,
            name: strip_pdf_suffix(&file.name).to_string(),
            pdf_url: pdf_url(&file.id),
        })
        .collect();

    // Stable, so files whose names differ only by case keep API order.
    songs.sort_by_cached_key(|song| song.name.to_lowercase());
    for (idx, song) in songs.iter_mut().enumerate() {
        song.id = idx as u32 + 1;
    }
    songs
}

/// Write a manifest as 2-space-indented JSON with a trailing newline.
///
/// Parent directories are created as needed; an existing file at the target
/// path is overwritten unconditionally.
pub fn write_manifest(songs: &[Song], path: &Path) -> Result<(), ManifestError> {
    ensure_parent_dir(path)?;
    let mut json = serde_json::to_string_pretty(songs)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Create the parent directory chain of `path` if it has one.
///
/// A bare relative filename like `songs.json` has an empty parent, which
/// must not reach `create_dir_all`.
fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file(id: &str, name: &str) -> DriveFile {
        DriveFile {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn strips_lowercase_suffix() {
        assert_eq!(strip_pdf_suffix("Amazing Grace.pdf"), "Amazing Grace");
    }

    #[test]
    fn strips_uppercase_and_mixed_suffix() {
        assert_eq!(strip_pdf_suffix("apple.PDF"), "apple");
        assert_eq!(strip_pdf_suffix("Hallelujah.Pdf"), "Hallelujah");
    }

    #[test]
    fn strips_only_the_last_suffix() {
        assert_eq!(strip_pdf_suffix("set.pdf.pdf"), "set.pdf");
    }

    #[test]
    fn leaves_non_suffix_names_alone() {
        assert_eq!(strip_pdf_suffix("notes.pdfx"), "notes.pdfx");
        assert_eq!(strip_pdf_suffix("pdf"), "pdf");
        assert_eq!(strip_pdf_suffix(""), "");
    }

    #[test]
    fn bare_suffix_becomes_empty() {
        assert_eq!(strip_pdf_suffix(".pdf"), "");
    }

    #[test]
    fn multibyte_names_survive() {
        assert_eq!(strip_pdf_suffix("Canción.pdf"), "Canción");
        // 4-byte split would land mid-char here; must not panic or strip.
        assert_eq!(strip_pdf_suffix("ことばの歌"), "ことばの歌");
    }

    #[test]
    fn sorts_case_insensitively_and_renumbers() {
        // The canonical example from the site's manifest contract.
        let songs = build_songs(&[file("a1", "Zebra.pdf"), file("b2", "apple.PDF")]);
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, 1);
        assert_eq!(songs[0].name, "apple");
        assert!(songs[0].pdf_url.contains("id=b2"));
        assert_eq!(songs[1].id, 2);
        assert_eq!(songs[1].name, "Zebra");
        assert!(songs[1].pdf_url.contains("id=a1"));
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let files: Vec<DriveFile> = ["d.pdf", "b.pdf", "c.pdf", "a.pdf"]
            .iter()
            .enumerate()
            .map(|(i, name)| file(&format!("f{i}"), name))
            .collect();
        let songs = build_songs(&files);
        let ids: Vec<u32> = songs.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let names: Vec<&str> = songs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn output_is_independent_of_api_order() {
        let forward = build_songs(&[
            file("a", "Blue.pdf"),
            file("b", "amber.pdf"),
            file("c", "Crimson.pdf"),
        ]);
        let shuffled = build_songs(&[
            file("c", "Crimson.pdf"),
            file("a", "Blue.pdf"),
            file("b", "amber.pdf"),
        ]);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn case_only_ties_keep_api_order() {
        let songs = build_songs(&[file("first", "Uke.pdf"), file("second", "uke.pdf")]);
        assert_eq!(songs[0].name, "Uke");
        assert!(songs[0].pdf_url.contains("id=first"));
        assert_eq!(songs[1].name, "uke");
    }

    #[test]
    fn url_uses_direct_download_form() {
        assert_eq!(
            pdf_url("abc123"),
            "https://drive.usercontent.google.com/u/0/uc?id=abc123&export=download"
        );
    }

    #[test]
    fn serializes_with_camel_case_url_key() {
        let songs = build_songs(&[file("x", "Tiny.pdf")]);
        let json = serde_json::to_string(&songs).unwrap();
        assert!(json.contains(r#""pdfUrl""#));
        assert!(!json.contains("pdf_url"));
    }

    #[test]
    fn write_is_indented_with_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("songs.json");
        let songs = build_songs(&[file("x", "Tiny.pdf")]);
        write_manifest(&songs, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("]\n"));
        assert!(content.contains("  {\n"));
        let parsed: Vec<Song> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, songs);
    }

    #[test]
    fn write_creates_parent_directories_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data/nested/songs.json");
        write_manifest(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");

        let songs = build_songs(&[file("x", "One.pdf")]);
        write_manifest(&songs, &path).unwrap();
        let parsed: Vec<Song> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn bare_filename_skips_directory_creation() {
        // "songs.json" parses to an empty parent; the guard must treat that
        // as nothing-to-create rather than calling create_dir_all("").
        assert_eq!(Path::new("songs.json").parent(), Some(Path::new("")));
        ensure_parent_dir(Path::new("songs.json")).unwrap();

        let tmp = TempDir::new().unwrap();
        write_manifest(&[], &tmp.path().join("songs.json")).unwrap();
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.json");
        let b = tmp.path().join("b.json");
        let files = [file("p", "Alpha.pdf"), file("q", "beta.pdf")];
        write_manifest(&build_songs(&files), &a).unwrap();
        let reordered = [file("q", "beta.pdf"), file("p", "Alpha.pdf")];
        write_manifest(&build_songs(&reordered), &b).unwrap();
        assert_eq!(
            std::fs::read(&a).unwrap(),
            std::fs::read(&b).unwrap()
        );
    }
}
