//! ZIP packaging of a generated project.

use crate::error::Result;
use crate::generators::FileSet;
use blueprint_core::AppConfig;
use std::io::{Seek, Write};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// File name of the source archive for a project.
pub fn archive_name(config: &AppConfig) -> String {
    format!("{}_source.zip", config.sanitized_name())
}

/// Pack a file set into a ZIP archive.
///
/// Every entry is placed under a `{sanitized name}/` root directory.
pub fn write_archive<W: Write + Seek>(files: &FileSet, config: &AppConfig, writer: W) -> Result<W> {
    let root = config.sanitized_name();
    let mut zip = ZipWriter::new(writer);

    let file_options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, content) in files.iter() {
        zip.start_file(format!("{}/{}", root, path), file_options.clone())?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Pack a file set into an in-memory ZIP archive.
pub fn archive_bytes(files: &FileSet, config: &AppConfig) -> Result<Vec<u8>> {
    let cursor = write_archive(files, config, std::io::Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}
