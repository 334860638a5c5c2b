//! NASA Exoplanet Archive integration (TAP synchronous queries).

use std::time::Duration;

use log::info;
use reqwest::blocking::Client;

use crate::error::AppError;

const DEFAULT_TAP_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Columns pulled from the Planetary Systems (`ps`) table.
///
/// Reference: https://exoplanetarchive.ipac.caltech.edu/docs/API_PS_columns.html
pub const COLUMNS: [&str; 11] = [
    "pl_name",
    "disc_facility",
    "pl_rade",
    "pl_radeerr1",
    "pl_radeerr2",
    "pl_bmasse",
    "pl_bmasseerr1",
    "pl_bmasseerr2",
    "pl_eqt",
    "sy_jmag",
    "st_rad",
];

/// ADQL selecting transiting planets cooler than `max_teq_k` and smaller than
/// `max_radius_earth`.
pub fn small_warm_worlds_query(max_teq_k: f64, max_radius_earth: f64) -> String {
    format!(
        "SELECT {} FROM ps WHERE tran_flag=1 and pl_eqt<{max_teq_k} and pl_rade<{max_radius_earth}",
        COLUMNS.join(",")
    )
}

pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    /// Build a client; `EXOPLANET_ARCHIVE_URL` (environment or `.env`) overrides
    /// the TAP endpoint.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("EXOPLANET_ARCHIVE_URL").unwrap_or_else(|_| DEFAULT_TAP_URL.to_string());

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::external(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Run an ADQL query and return the result table as CSV text.
    pub fn fetch_csv(&self, query: &str) -> Result<String, AppError> {
        info!("Querying {} ...", self.base_url);

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("query", query), ("format", "csv")])
            .send()
            .map_err(|e| AppError::external(format!("Archive request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::external(format!(
                "Archive request failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::external(format!("Failed to read archive response: {e}")))?;

        if body.trim().is_empty() {
            return Err(AppError::external("Archive returned an empty response."));
        }

        Ok(body)
    }
}
