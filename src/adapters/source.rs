use crate::config::FetchConfig;
use crate::domain::ports::PageSource;
use crate::utils::error::{Result, ViewerError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use std::path::Path;
use url::Url;

// Everything but unreserved characters, so `:` `!` `&` `+` and friends are escaped too.
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Loads article HTML from a local file, or from the encyclopedia by title.
pub struct PageLoader {
    config: FetchConfig,
    client: Client,
}

impl PageLoader {
    pub fn new(config: FetchConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Appends `title` to the base URL as one percent-encoded path segment.
    pub fn article_url(&self, title: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let encoded = utf8_percent_encode(title, TITLE_ENCODE_SET);

        Url::parse(&format!("{}/{}", base, encoded)).map_err(|e| {
            ViewerError::InvalidConfigValue {
                field: "base_url".to_string(),
                value: self.config.base_url.clone(),
                reason: format!("cannot append article title: {}", e),
            }
        })
    }

    pub async fn fetch_article(&self, title: &str) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ViewerError::input("Empty article title is not allowed."));
        }

        let url = self.article_url(title)?;
        tracing::debug!("Making request to: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(ViewerError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let declared = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(charset_label)
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(decode_html(&body, declared.as_deref()))
    }
}

/// Decodes with the declared charset, else a charset named in the first KiB
/// of the document (`<meta charset=..>` or `http-equiv`), else UTF-8.
fn decode_html(body: &[u8], declared: Option<&str>) -> String {
    let encoding = declared
        .map(str::to_string)
        .or_else(|| sniff_charset(body))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, used, malformed) = encoding.decode(body);
    tracing::debug!("Decoded response body as {}", used.name());
    if malformed {
        tracing::warn!("Response body has byte sequences invalid in {}", used.name());
    }
    text.into_owned()
}

fn sniff_charset(body: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);
    charset_label(&head).map(str::to_string)
}

/// Value following the first `charset=` in `text`, quotes stripped.
fn charset_label(text: &str) -> Option<&str> {
    const KEY: &str = "charset=";
    // ASCII lowercasing keeps byte offsets intact.
    let start = text.to_ascii_lowercase().find(KEY)? + KEY.len();
    let rest = text[start..].trim_start_matches(|c: char| c == '"' || c == '\'');
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')))
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

async fn read_html_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[async_trait]
impl PageSource for PageLoader {
    async fn load(&self, token: &str) -> Result<String> {
        let path = Path::new(token);
        if path.is_file() {
            tracing::debug!("Reading local HTML file {}", path.display());
            return read_html_file(path).await;
        }
        self.fetch_article(token).await
    }
}
