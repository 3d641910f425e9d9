use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use log::{debug, info};
use walkdir::WalkDir;
use zip::{write::FileOptions, ZipWriter};

use crate::constants::COMPRESSION_CHUNK_SIZE as CHUNK_SIZE;
use crate::error::{ReporterError, Result};

/// ZIP options shared by every report entry.
fn archive_options() -> FileOptions {
    FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(6))
        .unix_permissions(0o644)
}

/// Package a validated report path into a ZIP archive at `archive_path`.
///
/// A directory is walked recursively and every regular file is stored under
/// its full traversal path, root component included (`reports/a/junit.xml`
/// for a source of `reports`). A single file is stored under its base name
/// only. Every file is archived, not only those matching the report pattern.
///
/// Any existing file at `archive_path` is truncated. On failure the partially
/// written archive is left in place.
///
/// # Arguments
///
/// * `source` - Validated report file or directory
/// * `archive_path` - Where to write the archive
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the created archive
/// * `Err` - If any file cannot be read or the archive cannot be written
pub fn create_report_archive(source: &Path, archive_path: &Path) -> Result<PathBuf> {
    let start = Instant::now();
    info!("Archiving {} into {}", source.display(), archive_path.display());

    let source_is_dir = fs::metadata(source)
        .map_err(|e| archive_error(source, e))?
        .is_dir();

    let archive_file = fs::File::create(archive_path).map_err(|e| archive_error(archive_path, e))?;
    let mut zip = ZipWriter::new(archive_file);

    let entry_count = if source_is_dir {
        let own_archive = fs::canonicalize(archive_path).ok();
        add_directory(&mut zip, source, own_archive.as_deref())?
    } else {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry_name(source));
        append_file(&mut zip, source, &name)?;
        1
    };

    zip.finish()?;

    info!(
        "Archived {} file(s) to {} in {:?}",
        entry_count,
        archive_path.display(),
        start.elapsed()
    );
    Ok(archive_path.to_path_buf())
}

/// Walk `root` and add every non-directory entry, returning how many were added.
fn add_directory(
    zip: &mut ZipWriter<fs::File>,
    root: &Path,
    own_archive: Option<&Path>,
) -> Result<usize> {
    let mut count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            archive_error(&path, e.into())
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        // The archive may live inside the directory being archived
        if is_own_archive(entry.path(), own_archive) {
            debug!("Skipping archive being written: {}", entry.path().display());
            continue;
        }

        append_file(zip, entry.path(), &entry_name(entry.path()))?;
        count += 1;
    }

    Ok(count)
}

/// Stream a file into a new archive entry in fixed-size chunks.
fn append_file(zip: &mut ZipWriter<fs::File>, path: &Path, name: &str) -> Result<()> {
    let file = fs::File::open(path).map_err(|e| archive_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    zip.start_file(name, archive_options())?;

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| archive_error(path, e))?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])
            .map_err(|e| archive_error(path, e))?;
        total += bytes_read as u64;
    }

    debug!("Added {} ({} bytes)", name, total);
    Ok(())
}

fn is_own_archive(path: &Path, own_archive: Option<&Path>) -> bool {
    match own_archive {
        Some(archive) if path.file_name() == archive.file_name() => {
            fs::canonicalize(path).map(|p| p == archive).unwrap_or(false)
        }
        _ => false,
    }
}

/// Archive entry name for a traversal path, always using `/` separators.
fn entry_name(path: &Path) -> String {
    let cleaned = clean_path(path);
    let name = cleaned.to_string_lossy();
    if cfg!(windows) {
        name.replace('\\', "/")
    } else {
        name.into_owned()
    }
}

/// Lexically normalize a path: `.` parts are dropped and `..` removes the
/// preceding normal part. A `..` directly after the root is dropped, while
/// leading `..` parts of a relative path are kept.
fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

fn archive_error(path: &Path, source: std::io::Error) -> ReporterError {
    ReporterError::Archive {
        path: path.to_path_buf(),
        source,
    }
}
