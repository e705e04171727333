//! Spark endpoint addressing.

use intraday_types::RangeSpec;

use crate::BatchRequest;

/// Default quote service host.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Path of the batched close-price endpoint.
pub const SPARK_PATH: &str = "/v7/finance/spark";

/// Builds the endpoint URL for a service host.
///
/// # Example
///
/// ```
/// use intraday_fetch::url::{BASE_URL, spark_url};
///
/// assert_eq!(spark_url(BASE_URL), "https://query1.finance.yahoo.com/v7/finance/spark");
/// ```
#[must_use]
pub fn spark_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SPARK_PATH)
}

/// Builds the query parameters for a batch request.
///
/// Symbols are comma-joined so the whole watchlist travels in one request.
/// Percent-encoding is left to the HTTP client.
#[must_use]
pub fn spark_query(request: &BatchRequest) -> Vec<(&'static str, String)> {
    let symbols = request
        .symbols
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut query = vec![("symbols", symbols)];
    match request.range {
        RangeSpec::Period(period) => query.push(("range", period.as_str().to_string())),
        RangeSpec::Between { start, end } => {
            query.push(("period1", start.timestamp().to_string()));
            query.push(("period2", end.timestamp().to_string()));
        }
    }
    if let Some(interval) = request.interval {
        query.push(("interval", interval.as_str().to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use intraday_types::{Interval, Period, Symbol};

    #[test]
    fn test_query_with_period() {
        let request = BatchRequest {
            symbols: vec![Symbol::new("^OMXH25"), Symbol::new("NOKIA.HE")],
            range: RangeSpec::Period(Period::Day5),
            interval: Some(Interval::Minute1),
        };

        assert_eq!(
            spark_query(&request),
            [
                ("symbols", "^OMXH25,NOKIA.HE".to_string()),
                ("range", "5d".to_string()),
                ("interval", "1m".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_with_window() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let request = BatchRequest {
            symbols: vec![Symbol::new("AMD")],
            range: RangeSpec::Between { start, end },
            interval: None,
        };

        assert_eq!(
            spark_query(&request),
            [
                ("symbols", "AMD".to_string()),
                ("period1", "1704067200".to_string()),
                ("period2", "1704153600".to_string()),
            ]
        );
    }

    #[test]
    fn test_spark_url_trims_slash() {
        assert_eq!(
            spark_url("http://localhost:8080/"),
            "http://localhost:8080/v7/finance/spark"
        );
    }
}
