//! `dwimgs <urls_file> <dest_dir>`: validate inputs, run the pipeline, write `result.json`.

use anyhow::Result;
use dwimgs_core::config::DwimgsConfig;
use dwimgs_core::fetch::{CurlFetcher, FetchOptions};
use dwimgs_core::pipeline::{Pipeline, PipelineOptions};
use dwimgs_core::report::SummaryReport;
use dwimgs_core::setup;
use std::path::Path;

use super::output;

/// Runs one batch. Setup problems surface as [`setup::SetupError`] inside the
/// returned error, before anything is fetched or written.
pub fn run_download(
    cfg: &DwimgsConfig,
    urls_file: &Path,
    dest_dir: &Path,
    verbose: bool,
) -> Result<SummaryReport> {
    let dest = setup::prepare_destination(dest_dir)?;
    let urls = setup::read_url_list(urls_file)?;
    tracing::info!(
        urls = urls.len(),
        dest = %dest.display(),
        "starting batch"
    );

    let fetcher = CurlFetcher::new(FetchOptions::from(cfg));
    let pipeline = Pipeline::new(
        fetcher,
        PipelineOptions {
            announce_start: verbose,
        },
    );
    let report = pipeline.run(&urls, &dest, |event| output::print_event(&event));

    let report_path = report.write_to_dir(&dest)?;
    output::print_summary(&report, &report_path);
    Ok(report)
}
