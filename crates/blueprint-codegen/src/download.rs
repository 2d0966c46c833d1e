//! Individual file downloads pushed to the caller.

use crate::error::{ExportError, Result};
use crate::generators::{paths, FileSet};
use blueprint_core::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// A generated file offered as a discrete named download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub content: String,
    pub content_type: &'static str,
}

/// Receives downloads pushed by the exporter.
pub trait DownloadSink {
    fn push(&mut self, download: &Download) -> Result<()>;
}

/// Select the primary project files as named downloads.
///
/// The entry module is prefixed with the sanitized project name so that
/// several exports can share one downloads folder.
pub fn downloads(files: &FileSet, config: &AppConfig) -> Result<Vec<Download>> {
    let plan = [
        (paths::ENTRY, format!("{}_App.tsx", config.sanitized_name()), "text/plain"),
        (paths::PACKAGE, paths::PACKAGE.to_string(), "application/json"),
        (paths::MANIFEST, paths::MANIFEST.to_string(), "application/json"),
        (paths::README, paths::README.to_string(), "text/markdown"),
    ];

    plan.into_iter()
        .map(|(path, filename, content_type)| -> Result<Download> {
            let content = files
                .get(path)
                .ok_or_else(|| ExportError::MissingFile(path.to_string()))?;
            Ok(Download {
                filename,
                content: content.to_string(),
                content_type,
            })
        })
        .collect()
}

/// Push every download into a sink, in order.
pub fn push_downloads(downloads: &[Download], sink: &mut dyn DownloadSink) -> Result<()> {
    for download in downloads {
        sink.push(download)?;
    }
    Ok(())
}

/// Writes downloads as files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DownloadSink for DirectorySink {
    fn push(&mut self, download: &Download) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&download.filename);
        fs::write(&path, &download.content)?;
        tracing::debug!(path = %path.display(), content_type = download.content_type, "wrote download");
        self.written.push(path);
        Ok(())
    }
}

/// Write a whole file set under `dir`, creating subdirectories as needed.
pub fn write_project(files: &FileSet, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for (relative, content) in files.iter() {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        written.push(path);
    }
    Ok(written)
}
