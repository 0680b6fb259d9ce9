//! Synthesized names and timestamp disambiguation.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

/// `strftime` format of the second-resolution stamp used in filenames (`YYMMDD_HHMMSS`).
pub const TIMESTAMP_FORMAT: &str = "%y%m%d_%H%M%S";

/// Bytes [`with_stamp`] adds to a name: `_` plus `YYMMDD_HHMMSS`.
pub const STAMP_SUFFIX_LEN: usize = 14;

/// Sequence number for images whose URL carries no recognized extension.
///
/// Starts at 1 and lives as long as the resolver that owns it; nothing is
/// persisted between runs. Atomic so a shared resolver hands out distinct numbers.
#[derive(Debug)]
pub struct NameCounter(AtomicU32);

impl NameCounter {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        NameCounter(AtomicU32::new(first))
    }

    /// Returns the current value and advances the counter.
    pub fn next(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    /// Value the next synthesized name will use.
    pub fn peek(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for NameCounter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `image_<NNN>_<YYMMDD_HHMMSS>.jpg`
pub fn synthesized_name(sequence: u32, at: NaiveDateTime) -> String {
    format!("image_{:03}_{}.jpg", sequence, format_timestamp(at))
}

/// Inserts `_<stamp>` before the extension of the last path component.
///
/// A name without an extension (or a dotfile such as `.jpg`) gets the stamp appended.
pub fn with_stamp(path: &Path, stamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    };
    path.with_file_name(name)
}
