//! Report file discovery and corpus loading.
//!
//! Reads IBKR activity statement exports from the data folder and
//! concatenates their lines into a [`ReportCorpus`] for downstream
//! extraction.

use std::path::{Path, PathBuf};

use report_core::error::{ReportError, Result};
use report_core::models::ReportCorpus;
use tracing::debug;

/// File-type suffix of report exports considered for ingestion.
const REPORT_EXTENSION: &str = "csv";

/// UTF-8 byte-order mark some exporters prepend to the file.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files directly inside `data_dir`.
///
/// Enumeration is non-recursive and keeps the order the filesystem returns;
/// files are not sorted. Entries without the `.csv` suffix are silently
/// ignored. A missing or unreadable folder is an error.
pub fn find_report_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(data_dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry.map_err(|e| ReportError::FolderRead {
            path: data_dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .map(|ext| ext == REPORT_EXTENSION)
                .unwrap_or(false)
        {
            files.push(entry.into_path());
        }
    }

    debug!(
        "Found {} report files in {}",
        files.len(),
        data_dir.display()
    );
    Ok(files)
}

/// Load every report file in `data_dir` into one [`ReportCorpus`].
///
/// Each file is read fully into memory and decoded as UTF-8 with a leading
/// byte-order mark stripped. Lines keep their file-internal order; files
/// are appended in enumeration order. Any unreadable or undecodable file
/// aborts the whole run.
pub fn load_corpus(data_dir: &Path) -> Result<ReportCorpus> {
    let files = find_report_files(data_dir)?;

    let mut lines: Vec<String> = Vec::new();
    for path in &files {
        let bytes = std::fs::read(path).map_err(|source| ReportError::FileRead {
            path: path.clone(),
            source,
        })?;
        let text = decode_report_text(path, &bytes)?;
        lines.extend(text.lines().map(str::to_owned));
        debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
    }

    debug!("Corpus holds {} lines from {} files", lines.len(), files.len());
    Ok(ReportCorpus::new(lines))
}

/// Report whether `data_dir` contains no entries at all.
///
/// Counts every directory entry, not just `.csv` files.
pub fn folder_is_empty(data_dir: &Path) -> Result<bool> {
    let mut entries = std::fs::read_dir(data_dir).map_err(|source| ReportError::FolderRead {
        path: data_dir.to_path_buf(),
        source,
    })?;
    Ok(entries.next().is_none())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Decode raw file bytes as UTF-8, stripping a leading byte-order mark so
/// the first line is not corrupted by encoding artifacts.
fn decode_report_text<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    let without_bom = bytes.strip_prefix(UTF8_BOM.as_slice()).unwrap_or(bytes);
    std::str::from_utf8(without_bom).map_err(|_| ReportError::Encoding {
        path: path.to_path_buf(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
