use std::time::Duration;

use mealdraft_catalog::{Meal, RawRow, SheetResponse, reconstruct, sample_meals};
use mealdraft_plan::DataOrigin;
use thiserror::Error;

/// Notice shown whenever the app is running on the built-in dataset.
pub const FALLBACK_NOTICE: &str =
    "Could not reach the meal sheet. Showing built-in fallback data.";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// Client for the spreadsheet-backed row endpoint.
#[derive(Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    url: String,
}

impl SheetClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Fetch the raw row table. Transport failures and responses missing the
    /// `dataEntry` field are reported separately so the caller can log the
    /// underlying cause.
    pub async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let sheet: SheetResponse =
            serde_json::from_str(&body).map_err(|err| SourceError::Shape(err.to_string()))?;

        Ok(sheet.data_entry)
    }

    /// Fetch and reconstruct the catalog. Never fails: any error collapses
    /// into the fallback dataset plus a user-visible notice.
    pub async fn load_catalog(&self) -> (Vec<Meal>, DataOrigin, Option<String>) {
        match self.fetch_rows().await {
            Ok(rows) => {
                let meals = reconstruct(&rows);
                tracing::info!(rows = rows.len(), meals = meals.len(), "catalog fetched");
                (meals, DataOrigin::Live, None)
            }
            Err(err) => {
                tracing::error!(err = %err, "sheet fetch failed, serving fallback data");
                (
                    sample_meals(),
                    DataOrigin::Fallback,
                    Some(FALLBACK_NOTICE.to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_source_falls_back() {
        // Port 9 (discard) refuses connections on loopback.
        let client =
            SheetClient::new("http://127.0.0.1:9/dataEntry", Duration::from_secs(1)).unwrap();

        let (meals, origin, notice) = client.load_catalog().await;
        assert_eq!(origin, DataOrigin::Fallback);
        assert!(meals.len() >= 2);
        assert!(notice.is_some());
    }

    #[test]
    fn shape_error_mentions_the_parse_failure() {
        let err = SourceError::Shape("missing field `dataEntry`".to_string());
        assert!(err.to_string().contains("dataEntry"));
    }
}
