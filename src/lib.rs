pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{export_to_csv, CsvFileSink, JsonLinesSink, PageLoader};
pub use config::cli::{parse_cli_args, CliArgs, ParsedArgs};
pub use config::FetchConfig;
pub use core::engine::ExtractionEngine;
pub use core::extract::{extract_series, extract_series_from_html};
pub use core::payload::locate_payload;
pub use domain::model::{Series, ViewRecord};
pub use utils::error::{Result, ViewerError};
