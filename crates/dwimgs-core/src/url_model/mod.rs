//! URL modeling and filename derivation.
//!
//! Turns an image URL into a path inside the destination directory without
//! touching the network: the name comes from the URL when it carries a known
//! image extension, otherwise it is synthesized from a counter and the local
//! time. An existing file at the candidate path is never reused; the name gets
//! a timestamp suffix instead (checked once, no retry loop).

mod naming;
mod path;
mod sanitize;

pub use naming::{
    format_timestamp, synthesized_name, with_stamp, NameCounter, STAMP_SUFFIX_LEN, TIMESTAMP_FORMAT,
};
pub use path::{filename_from_url, IMAGE_EXTENSIONS};
pub use sanitize::{sanitize_filename, MAX_NAME_LEN};

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Source of "now" for filename stamps.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Derives a collision-free target path for each URL.
///
/// Owns the [`NameCounter`] so the sequence lives exactly as long as one run.
#[derive(Debug)]
pub struct FilenameResolver {
    counter: NameCounter,
    clock: Clock,
}

impl Default for FilenameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameResolver {
    pub fn new() -> Self {
        Self::with_parts(NameCounter::new(), local_now)
    }

    /// Resolver with an explicit counter and clock (used by tests and embedders).
    pub fn with_parts(counter: NameCounter, clock: Clock) -> Self {
        FilenameResolver { counter, clock }
    }

    pub fn counter(&self) -> &NameCounter {
        &self.counter
    }

    /// Filename (no directory) for `url`: taken from the URL or synthesized.
    pub fn candidate_name(&self, url: &str) -> String {
        match filename_from_url(url) {
            Some(name) => sanitize_filename(&name),
            None => synthesized_name(self.counter.next(), (self.clock)()),
        }
    }

    /// Full path under `dest` for `url`, disambiguated once if the entry exists.
    ///
    /// # Examples
    ///
    /// - `https://example.com/cat.png` into an empty `/out` → `/out/cat.png`
    /// - same URL when `/out/cat.png` exists → `/out/cat_<YYMMDD_HHMMSS>.png`
    /// - `https://example.com/avatar` → `/out/image_001_<YYMMDD_HHMMSS>.jpg`
    pub fn resolve(&self, url: &str, dest: &Path) -> PathBuf {
        let candidate = dest.join(self.candidate_name(url));
        if !entry_exists(&candidate) {
            return candidate;
        }
        let stamp = format_timestamp((self.clock)());
        let resolved = with_stamp(&candidate, &stamp);
        tracing::debug!(
            existing = %candidate.display(),
            resolved = %resolved.display(),
            "target exists, disambiguated"
        );
        resolved
    }
}

/// True for any filesystem entry, including dangling symlinks.
fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}
