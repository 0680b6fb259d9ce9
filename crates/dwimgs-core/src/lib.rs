//! Core engine for dwimgs: turn a list of image URLs into files on disk plus
//! a summary report.
//!
//! - [`setup`] validates the destination and reads the URL list (once, up front)
//! - [`url_model`] derives a collision-free filename per URL, offline
//! - [`fetch`] performs the blocking HTTP GET
//! - [`storage`] writes bodies without clobbering existing files
//! - [`pipeline`] drives the above per URL and aggregates a [`report::SummaryReport`]

pub mod config;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod setup;
pub mod storage;
pub mod url_model;
