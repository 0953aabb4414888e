//! Song search client.

use crate::error::{Result, SearchError};
use crate::types::{SearchConfig, SearchHit, SearchResult};
use reqwest::Client;
use tracing::{debug, warn};

/// Client for `GET /api/search?term=`.
///
/// No retries: a failed search is reported once and the caller shows an
/// error state.
///
/// # Example
///
/// ```no_run
/// use tunebox_search::{SearchClient, SearchConfig};
///
/// # async fn example() -> tunebox_search::Result<()> {
/// let client = SearchClient::new(SearchConfig::new("http://localhost:8080"))?;
/// for result in client.search("daft punk").await? {
///     println!("{}", result.display_line());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
}

impl SearchClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SearchError::InvalidUrl("URL cannot be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SearchError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("Tunebox/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for songs.
    ///
    /// A blank term returns no results without sending a request.
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/search?term={}", self.base_url, urlencoding(term));
        debug!(url = %url, "Searching");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), term = %term, "Search failed");
            return Err(SearchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let hits: Vec<SearchHit> = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("Failed to parse search results: {}", e)))?;

        let total = hits.len();
        let results: Vec<SearchResult> = hits.into_iter().filter_map(SearchHit::into_result).collect();
        if results.len() < total {
            debug!(skipped = total - results.len(), "Dropped results without a preview");
        }

        debug!(term = %term, count = results.len(), "Search complete");
        Ok(results)
    }
}

/// URL-encode a query value.
fn urlencoding(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencoding() {
        assert_eq!(urlencoding("daft punk"), "daft+punk");
        assert_eq!(urlencoding("AC/DC & co"), "AC%2FDC+%26+co");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = SearchClient::new(SearchConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
