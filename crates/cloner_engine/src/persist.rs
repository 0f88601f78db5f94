use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cloner_logging::cloner_debug;

/// Prefix of the scratch file that becomes the artifact on rename.
const SCRATCH_PREFIX: &str = ".cloner-export-";

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot create {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Creates `dir` (and parents) unless it already is a directory.
pub fn ensure_export_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PersistError::NotADirectory(dir.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|source| PersistError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Writes `bytes` to `dir/filename` via a synced scratch file in the same
/// directory and a rename over the target. Readers see the old file or the
/// new one, never a prefix.
pub fn write_atomic(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, PersistError> {
    ensure_export_dir(dir)?;

    let mut scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempfile_in(dir)?;
    scratch.write_all(bytes)?;
    scratch.as_file().sync_all()?;

    let target = dir.join(filename);
    scratch.persist(&target).map_err(|err| err.error)?;
    cloner_debug!("Wrote {} bytes to {}", bytes.len(), target.display());
    Ok(target)
}
