use crate::core::extract::extract_series;
use crate::core::payload::locate_payload;
use crate::core::{PageSource, Result, Series, SeriesSink};

pub struct ExtractionEngine<S: PageSource> {
    source: S,
}

impl<S: PageSource> ExtractionEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load, locate and extract. Nothing is emitted here.
    pub async fn extract(&self, token: &str) -> Result<Series> {
        tracing::info!("Loading article page for {:?}", token);
        let html = self.source.load(token).await?;
        tracing::debug!("Loaded {} bytes of HTML", html.len());

        let payload = locate_payload(&html)?;
        let series = extract_series(&payload)?;
        tracing::info!("Extracted {} view records", series.len());

        Ok(series)
    }

    /// Extracts the series, then hands it to each sink in order. Sinks only
    /// see data once extraction fully succeeded.
    pub async fn run(&self, token: &str, sinks: &mut [&mut dyn SeriesSink]) -> Result<usize> {
        let series = self.extract(token).await?;

        for sink in sinks.iter_mut() {
            sink.write_series(&series)?;
        }

        Ok(series.len())
    }
}
