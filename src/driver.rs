//! Batch driver
//!
//!     Rewrites every matching style sheet in a directory in place. Files are handled one at a
//!     time in file-name order: read, convert, write, report, then the next one. The first
//!     read, write or listing failure stops the batch; files converted before it stay
//!     converted.
//!
//!     Only files directly inside the directory are considered. Subdirectories are not
//!     descended into.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::convert::{convert_sass_to_css_with, TransformOptions};
use crate::error::{Error, Result};
use crate::settings::BatchConfig;

/// Outcome for one file, handed to the caller's progress callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Converted text differs from what was on disk.
    pub changed: bool,
    /// The file was rewritten. False for dry runs and unchanged files.
    pub written: bool,
}

impl FileReport {
    /// File name as shown to users.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub changed: usize,
}

/// List the style sheets a batch run would touch, in processing order.
pub fn matching_files(batch: &BatchConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(batch.directory())
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if batch.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read one file and return its converted text without writing anything.
pub fn convert_file(path: &Path, options: &TransformOptions) -> Result<String> {
    let source = read_source(path)?;
    Ok(convert_sass_to_css_with(&source, options))
}

/// Convert every matching file in `batch.directory`, calling `on_file` after each one.
pub fn convert_directory<F>(
    batch: &BatchConfig,
    options: &TransformOptions,
    mut on_file: F,
) -> Result<BatchSummary>
where
    F: FnMut(&FileReport),
{
    let mut summary = BatchSummary::default();

    for path in matching_files(batch)? {
        let report = convert_in_place(&path, options, batch.dry_run)?;
        summary.processed += 1;
        if report.changed {
            summary.changed += 1;
        }
        on_file(&report);
    }

    info!(
        directory = %batch.directory().display(),
        processed = summary.processed,
        changed = summary.changed,
        dry_run = batch.dry_run,
        "batch finished"
    );
    Ok(summary)
}

fn convert_in_place(path: &Path, options: &TransformOptions, dry_run: bool) -> Result<FileReport> {
    debug!(path = %path.display(), "converting");
    let source = read_source(path)?;
    let converted = convert_sass_to_css_with(&source, options);
    let changed = converted != source;

    let written = changed && !dry_run;
    if written {
        fs::write(path, converted).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        debug!(path = %path.display(), changed, dry_run, "not rewriting");
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        changed,
        written,
    })
}
