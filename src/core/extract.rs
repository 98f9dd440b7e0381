use crate::core::navigation::JsonNav;
use crate::core::payload::locate_payload;
use crate::domain::model::{Series, ViewRecord};
use crate::utils::error::{Result, ViewerError};
use serde_json::Value;

pub const SWR_FALLBACK_PATH: [&str; 3] = ["props", "pageProps", "swrFallback"];
pub const GRAPH_DATA_KEY: &str = "/get_graph_data";
pub const TAG_COUNTS_FIELD: &str = "tagCounts";

/// Parses an article page and returns its daily view history.
pub fn extract_series_from_html(html: &str) -> Result<Series> {
    let payload = locate_payload(html)?;
    extract_series(&payload)
}

/// Walks `props.pageProps.swrFallback`, picks the graph data entry and
/// normalizes its `tagCounts`.
pub fn extract_series(payload: &Value) -> Result<Series> {
    let swr = payload.field_path(&SWR_FALLBACK_PATH)?;

    let (key, graph) = swr.entry_containing(GRAPH_DATA_KEY).map_err(|_| {
        ViewerError::structure(format!(
            "view history graph data key ('{}') not found",
            GRAPH_DATA_KEY
        ))
    })?;
    tracing::debug!("using graph data key {}", key);

    let tag_counts = graph.field(TAG_COUNTS_FIELD).map_err(|_| {
        ViewerError::structure(format!(
            "'{}' field is missing in graph data",
            TAG_COUNTS_FIELD
        ))
    })?;

    // Sometimes shipped as a JSON-encoded string rather than an array.
    let decoded;
    let entries = match tag_counts {
        Value::String(raw) => {
            decoded = serde_json::from_str::<Value>(raw)?;
            &decoded
        }
        other => other,
    };

    let series = normalize_entries(entries);
    if series.is_empty() {
        return Err(ViewerError::structure(format!(
            "no valid {{date, count}} entries found in '{}'",
            TAG_COUNTS_FIELD
        )));
    }

    tracing::debug!("extracted {} view records", series.len());
    Ok(series)
}

/// Keeps objects that have both `date` and `count`; other fields are dropped.
/// Anything that is not an array yields nothing.
fn normalize_entries(entries: &Value) -> Series {
    let Some(items) = entries.as_array() else {
        tracing::warn!("tagCounts is not an array");
        return Series::new();
    };

    let series: Series = items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let (date, count) = (obj.get("date")?, obj.get("count")?);
            match (date_text(date), view_count(count)) {
                (Some(date), Some(count)) => Some(ViewRecord::new(date, count)),
                _ => {
                    tracing::warn!("unusable tagCounts entry: {}", item);
                    None
                }
            }
        })
        .collect();

    if series.len() < items.len() {
        tracing::debug!(
            "skipped {} malformed tagCounts entries",
            items.len() - series.len()
        );
    }
    series
}

fn date_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integers as-is; integral floats and numeric strings are coerced.
fn view_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| view_count(&serde_json::from_str::<Value>(s).ok()?))
        }
        _ => None,
    }
}
