use crate::domain::model::ViewRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a title or file path to the article's HTML.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn load(&self, token: &str) -> Result<String>;
}

pub trait SeriesSink {
    fn write_series(&mut self, series: &[ViewRecord]) -> Result<()>;
}
