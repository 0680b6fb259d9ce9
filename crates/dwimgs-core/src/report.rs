//! Per-URL outcomes and the run summary persisted as `result.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the report file inside the destination directory.
pub const REPORT_FILE_NAME: &str = "result.json";

/// Result of processing one URL. Failure causes are not kept here (they are logged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn url(&self) -> &str {
        match self {
            Outcome::Success(url) | Outcome::Failure(url) => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Accumulates outcomes in arrival order; [`finish`](Self::finish) freezes it.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    processed: u64,
    failed: Vec<String>,
    succeeded: Vec<String>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success(url) => self.succeeded.push(url.clone()),
            Outcome::Failure(url) => self.failed.push(url.clone()),
        }
        self.processed += 1;
    }

    pub fn finish(self) -> SummaryReport {
        SummaryReport {
            urls_processed: self.processed,
            downloads_succeeded: self.succeeded.len() as u64,
            downloads_failed: self.failed.len() as u64,
            failed_downloads: self.failed,
            successful_downloads: self.succeeded,
        }
    }
}

/// Final summary of a run. Field order and names are the on-disk JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    #[serde(rename = "URLs processed")]
    urls_processed: u64,
    #[serde(rename = "Downloads succeeded")]
    downloads_succeeded: u64,
    #[serde(rename = "Downloads failed")]
    downloads_failed: u64,
    #[serde(rename = "Failed downloads")]
    failed_downloads: Vec<String>,
    #[serde(rename = "Successful downloads")]
    successful_downloads: Vec<String>,
}

impl SummaryReport {
    pub fn urls_processed(&self) -> u64 {
        self.urls_processed
    }

    pub fn downloads_succeeded(&self) -> u64 {
        self.downloads_succeeded
    }

    pub fn downloads_failed(&self) -> u64 {
        self.downloads_failed
    }

    /// Failed URLs in input order.
    pub fn failed_downloads(&self) -> &[String] {
        &self.failed_downloads
    }

    /// Saved URLs in input order.
    pub fn successful_downloads(&self) -> &[String] {
        &self.successful_downloads
    }

    /// JSON text with 4-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser).context("failed to serialize report")?;
        Ok(())
    }

    /// Write `result.json` into `dest_dir`, replacing any existing report. Returns its path.
    pub fn write_to_dir(&self, dest_dir: &Path) -> Result<PathBuf> {
        let path = dest_dir.join(REPORT_FILE_NAME);
        let file = File::create(&path)
            .with_context(|| format!("failed to create report: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        tracing::info!(path = %path.display(), "report written");
        Ok(path)
    }

    /// Read a report previously written by [`write_to_dir`](Self::write_to_dir).
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report: {}", path.display()))?;
        let report = serde_json::from_str(&data)
            .with_context(|| format!("malformed report: {}", path.display()))?;
        Ok(report)
    }
}
