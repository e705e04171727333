//! Spark response decoding.

use chrono::DateTime;
use intraday_types::{FetchError, PriceSample, Symbol};
use serde::Deserialize;

use crate::BatchResponse;

#[derive(Debug, Deserialize)]
struct Envelope {
    spark: Body,
}

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    result: Option<Vec<SymbolResult>>,
    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct SymbolResult {
    symbol: String,
    #[serde(default)]
    response: Vec<Chart>,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Decodes a spark response body into per-symbol samples.
///
/// `null` closes become missing samples. A symbol with no chart data maps to
/// an empty sequence.
///
/// # Errors
///
/// Returns an error if the body is not a spark document, or if the service
/// reports an error instead of any results.
pub fn parse_spark(body: &[u8]) -> Result<BatchResponse, FetchError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let results = match (envelope.spark.result, envelope.spark.error) {
        (Some(results), _) => results,
        (None, Some(error)) => {
            return Err(FetchError::Decode(format!(
                "{}: {}",
                error.code, error.description
            )));
        }
        (None, None) => Vec::new(),
    };

    Ok(results
        .into_iter()
        .map(|result| {
            let samples = result.response.into_iter().flat_map(chart_samples).collect();
            (Symbol::new(result.symbol), samples)
        })
        .collect())
}

fn chart_samples(chart: Chart) -> Vec<PriceSample> {
    let closes = chart
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    chart
        .timestamp
        .into_iter()
        .enumerate()
        .filter_map(|(i, secs)| {
            let timestamp = DateTime::from_timestamp(secs, 0)?;
            Some(PriceSample {
                timestamp,
                close: closes.get(i).copied().flatten(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const FIXTURE: &str = r#"{
        "spark": {
            "result": [
                {
                    "symbol": "NOKIA.HE",
                    "response": [{
                        "meta": {"currency": "EUR", "symbol": "NOKIA.HE"},
                        "timestamp": [1704978000, 1704978060, 1704978120],
                        "indicators": {"quote": [{"close": [3.21, null, 3.25]}]}
                    }]
                },
                {
                    "symbol": "SAMPO.HE",
                    "response": []
                }
            ],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_spark_fixture() {
        let rows = parse_spark(FIXTURE.as_bytes()).unwrap();

        let nokia = &rows[&Symbol::new("NOKIA.HE")];
        assert_eq!(nokia.len(), 3);
        assert_eq!(
            nokia[0],
            PriceSample::new(Utc.with_ymd_and_hms(2024, 1, 11, 13, 0, 0).unwrap(), 3.21)
        );
        assert_eq!(nokia[1].close, None);
        assert_eq!(nokia[2].close, Some(3.25));

        assert!(rows[&Symbol::new("SAMPO.HE")].is_empty());
    }

    #[test]
    fn test_short_close_array_yields_missing() {
        let body = r#"{"spark":{"result":[{"symbol":"AMD","response":[
            {"timestamp":[1704978000,1704978060],"indicators":{"quote":[{"close":[150.0]}]}}
        ]}]}}"#;
        let rows = parse_spark(body.as_bytes()).unwrap();
        let amd = &rows[&Symbol::new("AMD")];
        assert_eq!(amd[0].close, Some(150.0));
        assert_eq!(amd[1].close, None);
    }

    #[test]
    fn test_service_error_is_fetch_error() {
        let body = r#"{"spark":{"result":null,"error":{"code":"Bad Request","description":"Missing value for the \"symbols\" argument"}}}"#;
        assert!(matches!(
            parse_spark(body.as_bytes()),
            Err(FetchError::Decode(msg)) if msg.starts_with("Bad Request")
        ));
    }

    #[test]
    fn test_garbage_is_fetch_error() {
        assert!(matches!(
            parse_spark(b"<html>rate limited</html>"),
            Err(FetchError::Decode(_))
        ));
    }
}
