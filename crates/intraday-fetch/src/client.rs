//! HTTP quote source.

use async_trait::async_trait;
use intraday_types::FetchError;
use reqwest::Client;
use std::time::Duration;

use crate::url::{BASE_URL, spark_query, spark_url};
use crate::{BatchRequest, BatchResponse, QuoteSource, parse_spark};

/// Configuration for the HTTP quote source.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service host, without a trailing path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("intraday/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Quote source backed by the batched spark endpoint.
///
/// Every call is a single attempt; a failed refresh is simply retried by the
/// next scheduled one.
#[derive(Debug, Clone)]
pub struct SparkSource {
    client: Client,
    config: ClientConfig,
}

impl SparkSource {
    /// Creates a new source with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // One host, one request per refresh: keep the connection warm between ticks
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a source with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the source configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl QuoteSource for SparkSource {
    async fn fetch_batch(&self, request: &BatchRequest) -> Result<BatchResponse, FetchError> {
        let response = self
            .client
            .get(spark_url(&self.config.base_url))
            .query(&spark_query(request))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        // The service reports unknown symbols inside a 200 body, so any
        // error status means the batch as a whole failed.
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        parse_spark(&body)
    }
}

fn transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("intraday/"));
    }

    #[tokio::test]
    async fn test_source_creation() {
        let source = SparkSource::with_defaults();
        assert!(source.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let source = SparkSource::new(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            ..Default::default()
        })
        .unwrap();
        let request = BatchRequest {
            symbols: vec!["AMD".into()],
            range: intraday_types::RangeSpec::Period(intraday_types::Period::Day1),
            interval: None,
        };

        let err = source.fetch_batch(&request).await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_) | FetchError::Timeout));
    }
}
