use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::time::timeout;

use crate::catalog::movie::Movie;
use crate::config::SourceConfig;

/// Errors that end the startup fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or body transfer failure.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP status failed {code}")]
    Status { code: u16 },

    /// The body is not a list of movie records.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// No complete response within the configured timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

impl FetchError {
    /// Text shown to the user when the fetch fails.
    pub fn user_message(&self) -> String {
        format!("Failed to fetch: {self}")
    }
}

/// Read-only provider of the movie collection.
pub trait MovieSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Movie>, FetchError>> + Send;
}

/// Fetches the catalog with one GET against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpMovieSource {
    client: Client,
    url: String,
    request_timeout: Duration,
}

impl HttpMovieSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let request_timeout = Duration::from_secs(config.request_timeout_seconds);
        let client = Client::builder()
            .connect_timeout(request_timeout)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            request_timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn do_fetch(&self) -> Result<Vec<Movie>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        parse_catalog(&body)
    }
}

impl MovieSource for HttpMovieSource {
    async fn fetch(&self) -> Result<Vec<Movie>, FetchError> {
        tracing::info!(url = %self.url, "fetching movie catalog");

        let result = match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        };

        match &result {
            Ok(movies) => tracing::info!(count = movies.len(), "movie catalog received"),
            Err(err) => tracing::warn!(error = %err, "movie catalog fetch failed"),
        }
        result
    }
}

/// Decodes a catalog body.
///
/// Accepts a JSON array of records, skipping `null` slots, or an object
/// whose values are records, taken in the order they appear.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Movie>, FetchError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|err| FetchError::Malformed(err.to_string()))?;

    let entries: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, record)| record).collect(),
        other => {
            return Err(FetchError::Malformed(format!(
                "expected a list of movies, got {}",
                json_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter(|(_, record)| !record.is_null())
        .map(|(index, record)| {
            serde_json::from_value::<Movie>(record)
                .map_err(|err| FetchError::Malformed(format!("record {index}: {err}")))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_and_skips_holes() {
        let movies = parse_catalog(br#"[null, {"title":"Alien"}, null, {"title":"Heat"}]"#).unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Alien", "Heat"]);
    }

    #[test]
    fn parses_keyed_object_in_order() {
        let movies =
            parse_catalog(br#"{"-b": {"title":"Zodiac"}, "-a": {"title":"Arrival"}}"#).unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Zodiac", "Arrival"]);
    }

    #[test]
    fn rejects_non_collections() {
        let err = parse_catalog(b"null").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(ref msg) if msg.contains("null")));
        assert!(matches!(parse_catalog(b"{oops"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn rejects_record_that_is_not_an_object() {
        let err = parse_catalog(br#"[{"title":"Ok"}, 42]"#).unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn mistyped_fields_keep_the_record() {
        let movies = parse_catalog(
            br#"[{"title":"Heat","release_date":"1995-12-15"},
                 {"title":"Alien","release_date":1979,"genre":7,"tags":"horror"},
                 {"title":1917,"director":{"name":"Sam Mendes"},"rating":true,"cast":["A", 2, null]}]"#,
        )
        .unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Heat", "Alien", "1917"]);

        assert_eq!(movies[1].release_date.as_deref(), Some("1979"));
        assert_eq!(movies[1].genre.as_deref(), Some("7"));
        assert!(movies[1].tags.is_empty());
        assert!(movies[1].release_timestamp().is_some());

        assert_eq!(movies[2].director, None);
        assert_eq!(movies[2].rating, None);
        assert_eq!(movies[2].cast, ["A", "2"]);
    }

    #[test]
    fn status_message_matches_alert_text() {
        let err = FetchError::Status { code: 500 };
        assert_eq!(err.user_message(), "Failed to fetch: HTTP status failed 500");
    }
}
