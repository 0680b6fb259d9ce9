//! One-shot checks run before the pipeline starts.
//!
//! Every failure here aborts the run before any URL is fetched and before a
//! report exists.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid destination directory")]
    NotADirectory(PathBuf),
    #[error("The URL files provided doesn't exist")]
    UrlsFileNotFound(PathBuf),
    #[error("You can't write to this directory")]
    PermissionDenied(PathBuf),
    #[error("You can't read the URL file provided")]
    UrlsFileUnreadable(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SetupError {
    /// Path the error is about, for display next to the message.
    pub fn origin(&self) -> &Path {
        match self {
            SetupError::NotADirectory(p)
            | SetupError::UrlsFileNotFound(p)
            | SetupError::PermissionDenied(p)
            | SetupError::UrlsFileUnreadable(p) => p,
            SetupError::Io { path, .. } => path,
        }
    }

    fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => SetupError::PermissionDenied(path.to_path_buf()),
            _ => SetupError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Like `from_io`, but for reading the URL list rather than writing the destination.
    fn from_urls_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => SetupError::UrlsFileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => SetupError::UrlsFileUnreadable(path.to_path_buf()),
            _ => SetupError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Make `path` absolute against the current directory without touching the filesystem.
pub fn absolutize(path: &Path) -> Result<PathBuf, SetupError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| SetupError::from_io(path, e))?;
    Ok(cwd.join(path))
}

/// Ensure the destination exists, is a directory and accepts new files.
///
/// Creates the directory (and parents) when missing. Writability is proven by
/// creating and dropping an anonymous temp file inside it. Returns the absolute path.
pub fn prepare_destination(path: &Path) -> Result<PathBuf, SetupError> {
    let dir = absolutize(path)?;

    match fs::metadata(&dir) {
        Ok(meta) if !meta.is_dir() => return Err(SetupError::NotADirectory(dir)),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(&dir).map_err(|e| SetupError::from_io(&dir, e))?;
            tracing::info!(dir = %dir.display(), "created destination directory");
        }
        Err(e) => return Err(SetupError::from_io(&dir, e)),
    }

    tempfile::tempfile_in(&dir).map_err(|e| SetupError::from_io(&dir, e))?;
    Ok(dir)
}

/// Split URL list text into lines in file order (line endings removed).
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read the URL list file, one URL per line.
pub fn read_url_list(path: &Path) -> Result<Vec<String>, SetupError> {
    let file = absolutize(path)?;
    let text = fs::read_to_string(&file).map_err(|e| SetupError::from_urls_io(&file, e))?;
    Ok(parse_url_list(&text))
}
