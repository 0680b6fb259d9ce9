//! Sequential download pipeline.
//!
//! For each URL, in input order: resolve a target path, GET the URL, keep the
//! body only if the response is a 2xx image, and write it without clobbering
//! anything. Every URL ends as exactly one [`Outcome`]; no per-URL error can
//! abort the batch.

use crate::fetch::{Fetch, FetchError};
use crate::report::{Outcome, ReportBuilder, SummaryReport};
use crate::storage;
use crate::url_model::FilenameResolver;
use std::path::{Path, PathBuf};

/// Live progress notifications for the caller (e.g. terminal output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// About to fetch `url`. Only sent when [`PipelineOptions::announce_start`] is set.
    Started { url: String },
    /// `url` is done; sent exactly once per processed URL.
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Emit [`PipelineEvent::Started`] before each fetch (verbose mode).
    pub announce_start: bool,
}

pub struct Pipeline<F> {
    fetcher: F,
    resolver: FilenameResolver,
    options: PipelineOptions,
}

impl<F: Fetch> Pipeline<F> {
    pub fn new(fetcher: F, options: PipelineOptions) -> Self {
        Self::with_resolver(fetcher, FilenameResolver::new(), options)
    }

    pub fn with_resolver(fetcher: F, resolver: FilenameResolver, options: PipelineOptions) -> Self {
        Pipeline {
            fetcher,
            resolver,
            options,
        }
    }

    pub fn resolver(&self) -> &FilenameResolver {
        &self.resolver
    }

    /// Process every URL into `dest` and return the finalized summary.
    ///
    /// `dest` must already exist and be writable (see [`crate::setup::prepare_destination`]).
    /// Surrounding whitespace is trimmed; lines that are blank after trimming are skipped.
    pub fn run<I, S, E>(&self, urls: I, dest: &Path, mut on_event: E) -> SummaryReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: FnMut(PipelineEvent),
    {
        let mut report = ReportBuilder::new();

        for (index, line) in urls.into_iter().enumerate() {
            let url = line.as_ref().trim();
            if url.is_empty() {
                tracing::debug!(line = index + 1, "skipping blank line");
                continue;
            }

            if self.options.announce_start {
                on_event(PipelineEvent::Started {
                    url: url.to_string(),
                });
            }

            let outcome = match self.download_one(url, dest) {
                Ok(path) => {
                    tracing::info!(url, path = %path.display(), "saved image");
                    Outcome::Success(url.to_string())
                }
                Err(e) => {
                    tracing::warn!(url, "download failed: {}", e);
                    Outcome::Failure(url.to_string())
                }
            };

            report.record(&outcome);
            on_event(PipelineEvent::Finished(outcome));
        }

        let summary = report.finish();
        tracing::info!(
            processed = summary.urls_processed(),
            succeeded = summary.downloads_succeeded(),
            failed = summary.downloads_failed(),
            "pipeline finished"
        );
        summary
    }

    /// Resolve, fetch, validate and store one URL. Returns the written path.
    pub fn download_one(&self, url: &str, dest: &Path) -> Result<PathBuf, FetchError> {
        let target = self.resolver.resolve(url, dest);
        tracing::debug!(url, target = %target.display(), "resolved target");

        let body = self.fetcher.get(url)?.into_image()?;
        storage::write_new(&target, &body)?;
        Ok(target)
    }
}
