use crate::utils::error::{Result, ViewerError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> ViewerError {
    ViewerError::InvalidConfigValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The article base URL: http(s), and nothing after the path since the
/// encoded title is appended to it.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "article base URL is empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("not an absolute URL ({})", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("articles are fetched over http(s), not '{}'", url.scheme()),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            url_str,
            "the title is appended to the path, so a query or fragment is not allowed",
        ));
    }
    Ok(())
}

/// Output file paths: non-empty and free of NUL bytes.
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "output path is empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "output path contains a NUL byte"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://dic.pixiv.net/a/").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080/a/").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
        assert!(validate_url("base_url", "https://dic.pixiv.net/a/?lang=en").is_err());
        assert!(validate_url("base_url", "https://dic.pixiv.net/a/#top").is_err());
    }

    #[test]
    fn test_validation_messages_name_the_problem() {
        let err = validate_url("base_url", "ftp://dic.pixiv.net/a/").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'base_url' (ftp://dic.pixiv.net/a/): articles are fetched over http(s), not 'ftp'"
        );

        let err = validate_path("csv", "").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for 'csv' (): output path is empty");
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("csv", "out.csv").is_ok());
        assert!(validate_path("csv", "").is_err());
        assert!(validate_path("csv", "bad\0name.csv").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("user_agent", "Mozilla/5.0").is_ok());
        assert!(validate_non_empty_string("user_agent", "   ").is_err());
    }
}
