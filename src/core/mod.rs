pub mod engine;
pub mod extract;
pub mod navigation;
pub mod payload;

pub use crate::domain::model::{Series, ViewRecord};
pub use crate::domain::ports::{PageSource, SeriesSink};
pub use crate::utils::error::Result;
