//! Disk I/O for downloaded images.
//!
//! Each image is written in one piece to a file that must not exist yet
//! (`O_CREAT | O_EXCL`), so a name collision the resolver did not catch fails
//! the write instead of clobbering an unrelated file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Create `path` (which must not exist), write all of `data` and sync it.
///
/// On a failed write the partially written file is removed. A pre-existing
/// entry at `path` yields `ErrorKind::AlreadyExists` and is left untouched.
pub fn write_new(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options().write(true).create_new(true).open(path)?;

    let written = file.write_all(data).and_then(|()| file.sync_all());
    if let Err(e) = written {
        drop(file);
        if let Err(rm) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), "could not remove partial file: {}", rm);
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_whole_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("cat.png");
        let data: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
        write_new(&p, &data).unwrap();
        assert_eq!(fs::read(&p).unwrap(), data);
    }

    #[test]
    fn empty_body_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("empty.jpg");
        write_new(&p, b"").unwrap();
        assert_eq!(fs::metadata(&p).unwrap().len(), 0);
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("cat.png");
        fs::write(&p, b"original").unwrap();
        let err = write_new(&p, b"new").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&p).unwrap(), b"original");
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nope").join("cat.png");
        assert!(write_new(&p, b"x").is_err());
        assert!(!p.exists());
    }
}
