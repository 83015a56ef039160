//! Vault Scanner
//!
//! Walks the vault directory and registers every note (`.md`) and canvas
//! (`.canvas`) that the page index does not know yet. New pages start out
//! unpublished. Hidden directories such as `.obsidian` and `.trash` are
//! skipped, as are entries that cannot be read.
//!
//! Titles come from the file itself:
//!
//! - note: first line if it is a `#` heading, otherwise the file stem
//! - canvas: the top-level `name`, otherwise the file stem

use super::error::ScanError;
use crate::index::InMemoryPageIndex;
use crate::models::FileType;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Outcome of one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Pages added to the index by this scan
    pub new_files: usize,
    /// Notes and canvases found in the vault
    pub scanned_files: usize,
}

/// A page file found on disk, before it is checked against the index
#[derive(Debug, Clone, PartialEq, Eq)]
struct DiscoveredFile {
    relative_path: String,
    title: String,
}

/// Scan `root` and insert new pages into `index`
pub async fn scan_vault(root: &Path, index: &InMemoryPageIndex) -> Result<ScanReport, ScanError> {
    let root_owned = root.to_path_buf();
    let discovered = tokio::task::spawn_blocking(move || discover_files(&root_owned)).await??;

    let now = Utc::now();
    let mut report = ScanReport {
        scanned_files: discovered.len(),
        ..ScanReport::default()
    };

    for file in discovered {
        if let Some(record) = index
            .insert_if_absent(file.title, &file.relative_path, now)
            .await
        {
            tracing::debug!("Indexed new page {} at {}", record.id, record.file_path);
            report.new_files += 1;
        }
    }

    tracing::info!(
        "Vault scan of {} complete: {} files, {} new",
        root.display(),
        report.scanned_files,
        report.new_files
    );
    Ok(report)
}

/// Collect page files below `root`, sorted by path so new ids follow path order
fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::vault_not_found(root));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable vault entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_page_file(entry.path()) {
            continue;
        }

        let Some(relative_path) = relative_vault_path(root, entry.path()) else {
            continue;
        };
        files.push(DiscoveredFile {
            title: derive_title(entry.path()),
            relative_path,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_page_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md") | Some("canvas")
    )
}

/// `/`-separated path of `path` relative to `root`
fn relative_vault_path(root: &Path, path: &Path) -> Option<String> {
    let relative: PathBuf = path.strip_prefix(root).ok()?.to_path_buf();
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn derive_title(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    let title = match FileType::from_path(&path_str) {
        FileType::Note => note_title(path),
        FileType::Canvas => canvas_title(path),
    };
    title.unwrap_or_else(|| file_stem(path))
}

/// First line of a note if it is a heading
fn note_title(path: &Path) -> Option<String> {
    let file = std::fs::File::open(path).ok()?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line).ok()?;
    heading_title(&first_line)
}

fn heading_title(line: &str) -> Option<String> {
    let line = line.trim();
    if !line.starts_with('#') {
        return None;
    }
    let title = line.trim_start_matches('#').trim();
    (!title.is_empty()).then(|| title.to_string())
}

#[derive(Deserialize)]
struct CanvasName {
    name: Option<String>,
}

fn canvas_title(path: &Path) -> Option<String> {
    let source = std::fs::read_to_string(path).ok()?;
    serde_json::from_str::<CanvasName>(&source)
        .ok()?
        .name
        .filter(|name| !name.trim().is_empty())
}
