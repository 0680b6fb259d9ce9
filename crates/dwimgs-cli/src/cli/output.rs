//! Styled terminal lines. Colors are dropped automatically when stdout is not a terminal.

use console::style;
use dwimgs_core::pipeline::PipelineEvent;
use dwimgs_core::report::{Outcome, SummaryReport};
use dwimgs_core::setup::SetupError;
use std::path::Path;

/// Text for one pipeline event. Finished lines carry a trailing blank line.
pub fn render_event(event: &PipelineEvent) -> String {
    match event {
        PipelineEvent::Started { url } => {
            format!("{} {}", style("Downloading").green(), style(url).italic())
        }
        PipelineEvent::Finished(Outcome::Success(_)) => {
            format!("{}\n", style("Download successful").green().bold())
        }
        PipelineEvent::Finished(Outcome::Failure(_)) => {
            format!("{}\n", style("Download failed").red().bold())
        }
    }
}

pub fn print_event(event: &PipelineEvent) {
    println!("{}", render_event(event));
}

pub fn render_setup_error(err: &SetupError) -> String {
    format!(
        "{} [{}]",
        style(format!("ERROR: {}", err)).red().bold(),
        style(err.origin().display()).italic()
    )
}

pub fn print_setup_error(err: &SetupError) {
    eprintln!("{}", render_setup_error(err));
}

pub fn render_summary(report: &SummaryReport, report_path: &Path) -> String {
    format!(
        "{} processed, {} succeeded, {} failed (report: {})",
        report.urls_processed(),
        style(report.downloads_succeeded()).green(),
        style(report.downloads_failed()).red(),
        report_path.display()
    )
}

pub fn print_summary(report: &SummaryReport, report_path: &Path) {
    println!("{}", render_summary(report, report_path));
}
