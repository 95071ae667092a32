use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::HotelSearch;
use crate::models::{Coordinates, HotelEntry, HotelSearchResponse};

const SEARCH_RADIUS_KM: &str = "3";
/// WGS84, decimal degrees.
const DATUM_TYPE: &str = "1";
const NOT_FOUND: &str = "not_found";

pub struct RakutenTravelClient {
    url: String,
    application_id: String,
    client: reqwest::Client,
}

impl RakutenTravelClient {
    pub fn new(url: String, application_id: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build hotel search HTTP client")?;
        Ok(Self {
            url,
            application_id,
            client,
        })
    }

    pub fn query_params(&self, coords: Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_string()),
            ("latitude", format_coordinate(coords.latitude)),
            ("longitude", format_coordinate(coords.longitude)),
            ("searchRadius", SEARCH_RADIUS_KM.to_string()),
            ("datumType", DATUM_TYPE.to_string()),
            ("applicationId", self.application_id.clone()),
        ]
    }
}

pub fn format_coordinate(value: f64) -> String {
    format!("{value:.2}")
}

/// Decodes a search body. "not_found" means nothing in range and is an empty hit list.
pub fn parse_search_response(body: &[u8]) -> anyhow::Result<Vec<HotelEntry>> {
    let res: HotelSearchResponse =
        serde_json::from_slice(body).context("failed to parse hotel search response")?;

    match res.error.as_deref() {
        None => Ok(res.hotels),
        Some(NOT_FOUND) => Ok(Vec::new()),
        Some(code) => anyhow::bail!(
            "hotel search API error ({}): {}",
            code,
            res.error_description.unwrap_or_default()
        ),
    }
}

#[async_trait]
impl HotelSearch for RakutenTravelClient {
    async fn search(&self, coords: Coordinates) -> anyhow::Result<Vec<HotelEntry>> {
        let resp = self
            .client
            .get(&self.url)
            .query(&self.query_params(coords))
            .send()
            .await
            .context("failed to call hotel search API")?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .context("failed to read hotel search response")?;

        let hotels = parse_search_response(&body)?;
        // not_found arrives as a 404 with an error body
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("hotel search API returned {status}");
        }

        tracing::debug!(%status, count = hotels.len(), "hotel search finished");
        Ok(hotels)
    }
}
