use crate::utils::error::{Result, ViewerError};
use scraper::{Html, Selector};
use serde_json::Value;

pub const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

/// Finds the Next.js `__NEXT_DATA__` script in `html` and parses its JSON.
pub fn locate_payload(html: &str) -> Result<Value> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(NEXT_DATA_SELECTOR)
        .map_err(|e| ViewerError::structure(format!("invalid selector: {}", e)))?;

    let text = doc
        .select(&selector)
        .next()
        .map(|script| script.text().collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ViewerError::structure(
            "__NEXT_DATA__ script tag not found in HTML.",
        ));
    }

    tracing::debug!("__NEXT_DATA__ payload is {} bytes", text.len());
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_payload() {
        let html = r#"
            <html><head>
              <script id="other">{"x": 1}</script>
              <script id="__NEXT_DATA__" type="application/json">
                {"props": {"pageProps": {"title": "テスト"}}}
              </script>
            </head><body></body></html>
        "#;

        let payload = locate_payload(html).unwrap();

        assert_eq!(payload["props"]["pageProps"]["title"], "テスト");
    }

    #[test]
    fn test_script_contents_are_not_html_unescaped() {
        let html = r#"<script id="__NEXT_DATA__">{"s": "a < b && c > d"}</script>"#;

        let payload = locate_payload(html).unwrap();

        assert_eq!(payload["s"], "a < b && c > d");
    }

    #[test]
    fn test_missing_next_data() {
        let err = locate_payload("<html><body>No next data</body></html>").unwrap_err();

        assert!(matches!(err, ViewerError::Structure { .. }));
        assert!(err.to_string().contains("__NEXT_DATA__ script tag not found"));
    }

    #[test]
    fn test_empty_next_data() {
        let err = locate_payload(r#"<script id="__NEXT_DATA__">   </script>"#).unwrap_err();

        assert!(err.to_string().contains("__NEXT_DATA__ script tag not found"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = locate_payload(r#"<script id="__NEXT_DATA__">{"props": </script>"#)
            .unwrap_err();

        assert!(matches!(err, ViewerError::Parse(_)));
    }
}
