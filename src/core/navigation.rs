use crate::utils::error::{Result, ViewerError};
use serde_json::Value;

/// Checked access into a JSON tree. Every miss is a structure error.
pub trait JsonNav {
    fn field(&self, key: &str) -> Result<&Value>;

    /// Walks `path`; on failure the error names the dotted path up to the
    /// first missing key.
    fn field_path(&self, path: &[&str]) -> Result<&Value>;

    /// First entry, in document order, whose key contains `needle`.
    fn entry_containing(&self, needle: &str) -> Result<(&str, &Value)>;
}

impl JsonNav for Value {
    fn field(&self, key: &str) -> Result<&Value> {
        self.as_object()
            .and_then(|obj| obj.get(key))
            .ok_or_else(|| missing(key))
    }

    fn field_path(&self, path: &[&str]) -> Result<&Value> {
        let mut node = self;
        for (depth, key) in path.iter().enumerate() {
            node = node
                .as_object()
                .and_then(|obj| obj.get(*key))
                .ok_or_else(|| missing(&path[..=depth].join(".")))?;
        }
        Ok(node)
    }

    fn entry_containing(&self, needle: &str) -> Result<(&str, &Value)> {
        self.as_object()
            .and_then(|obj| obj.iter().find(|(key, _)| key.contains(needle)))
            .map(|(key, value)| (key.as_str(), value))
            .ok_or_else(|| {
                ViewerError::structure(format!("no key containing '{}' found", needle))
            })
    }
}

fn missing(path: &str) -> ViewerError {
    ViewerError::structure(format!("unexpected JSON structure: '{}' not found", path))
}
