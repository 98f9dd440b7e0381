// Adapters layer: the filesystem/HTTP page loader and the output sinks.

pub mod sink;
pub mod source;

pub use sink::{export_to_csv, CsvFileSink, JsonLinesSink};
pub use source::PageLoader;
