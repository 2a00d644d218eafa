use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

use crate::archive::{JpArchive, ZipEntry};
use crate::dostime::datetime_to_systime;
use crate::encoding::recover_file_name;
use crate::error::{UnzipError, UnzipResult};

/// Extract every entry under `dest_dir`, recovering each file name first.
///
/// Entries are processed strictly in archive order. The first failure
/// aborts the remaining entries; files already written stay in place.
pub fn extract_all(archive: &mut JpArchive, dest_dir: &Path, quiet: bool) -> UnzipResult<()> {
    fs::create_dir_all(dest_dir)?;

    let entries: Vec<ZipEntry> = archive.entries.clone();
    for entry in &entries {
        let name = recover_file_name(&entry.stored_name)?;
        if !quiet {
            println!("{name}");
        }
        extract_entry(archive, entry, &name, dest_dir)?;
    }
    Ok(())
}

/// Extract a single entry under `dest_dir` as `name`.
pub fn extract_entry(
    archive: &mut JpArchive,
    entry: &ZipEntry,
    name: &str,
    dest_dir: &Path,
) -> UnzipResult<()> {
    let file_name = name.replace('\\', "/");

    // Security: reject path traversal.
    if file_name.contains("../") || file_name.contains("..\\") {
        return Err(UnzipError::PathTraversal(file_name));
    }

    let dest_path = dest_dir.join(&file_name);

    // Security: reject absolute paths and any remaining traversal.
    let canonical_dest = fs::canonicalize(dest_dir)?;
    // dest_path may not exist yet; resolve via its parent directory.
    let resolved = if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
        fs::canonicalize(parent)?.join(dest_path.file_name().unwrap_or_default())
    } else {
        dest_path.clone()
    };
    if !resolved.starts_with(&canonical_dest) {
        return Err(UnzipError::PathTraversal(file_name));
    }

    // A trailing separator marks a directory: no payload to write.
    if file_name.ends_with('/') {
        fs::create_dir_all(&dest_path)?;
        return Ok(());
    }

    let mut reader = archive.open_entry(entry.index)?;
    let mut file = fs::File::create(&dest_path).map_err(UnzipError::CantOpenDestFile)?;
    io::copy(&mut reader, &mut file)?;
    drop(file);
    drop(reader);

    // Restore file modification time.
    if let Some(dt) = entry.modified {
        if let Some(systime) = datetime_to_systime(&dt) {
            let ft = FileTime::from_system_time(systime);
            let _ = filetime::set_file_mtime(&dest_path, ft);
        }
    }

    Ok(())
}
