//! # TVUS Tools
//!
//! Build utilities for the Temecula Valley Ukulele Strummers website. Two
//! independent jobs share one binary:
//!
//! ```text
//! songs         Drive folders  →  songs-*.json manifests (per configured drive)
//! brand-images  constants      →  images/*.png placeholder artwork
//! ```
//!
//! # The songs pipeline
//!
//! A linear fetch → transform → sort → write pass, run once per drive:
//!
//! ```text
//! 1. config    config.json + env vars     (which folders, which outputs)
//! 2. drive     files.list, paginated      (PDFs in one folder, API order)
//! 3. manifest  strip .pdf, sort, renumber (deterministic song records)
//! 4. write     2-space JSON + newline     (overwrite unconditionally)
//! ```
//!
//! There is deliberately no concurrency, no retry, no cache, and no state
//! between runs: the whole job finishes in seconds and reruns from scratch on
//! every deploy. Determinism is the one hard invariant — output order and ids
//! are a pure function of the file names, never of Drive's listing order (see
//! [`manifest`]).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.json` drives list, env-var resolution, defaults |
//! | [`drive`] | service-account auth + paginated `files.list`; the [`drive::FileLister`] seam |
//! | [`manifest`] | song-record schema, `.pdf` stripping, sort/renumber, JSON writing |
//! | [`songs`] | per-drive orchestration with failure isolation, legacy mode |
//! | [`brand`] | the three placeholder brand images |
//! | [`output`] | CLI progress/warning formatting (`format_*` pure, `print_*` wrappers) |
//!
//! # Design Decisions
//!
//! ## Blocking HTTP, No Runtime
//!
//! The Drive client uses `reqwest`'s blocking API. The job issues a handful
//! of requests strictly in sequence and finishes in seconds; an async runtime
//! would add a dependency tree without overlapping anything.
//!
//! ## Failure Isolation Per Drive
//!
//! One misconfigured or unshared folder must not take down every songbook on
//! the site. The drive loop catches per-drive errors and keeps going; only
//! configuration and authentication problems (which affect every drive
//! equally) abort the run. See [`songs`].
//!
//! ## Ids Are Positional
//!
//! Manifest ids are reassigned `1..=N` after sorting on every run. The
//! client script treats them as display ordinals, so stable identity across
//! runs is a non-goal — renaming a file renumbers the list, by contract.
//!
//! ## Pure-Rust Imaging
//!
//! Brand images are drawn with `imageproc` primitives over the `image` crate
//! and encoded as PNG in-process. Text prefers the system DejaVu face and
//! falls back to a built-in bitmap font, so the generator works in a bare CI
//! container with nothing installed.

pub mod brand;
pub mod config;
pub mod drive;
pub mod manifest;
pub mod output;
pub mod songs;
