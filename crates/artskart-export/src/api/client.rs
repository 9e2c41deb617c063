//! HTTP API client for the Artskart public API
//!
//! Provides methods for the two endpoints the export uses: taxon search and
//! the paged observations list.

use crate::api::{
    endpoints,
    types::{ObservationPage, TaxonHit},
};
use crate::config::{ExportConfig, PAGE_SIZE, REQUEST_TIMEOUT_SECS};
use crate::error::{ExportError, Result};
use reqwest::Client;
use std::time::Duration;

/// API client for the Artskart backend
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Static filter parameters for the observations list endpoint.
///
/// Fixed for the duration of a run; only the page index varies between
/// requests.
#[derive(Debug, Clone)]
pub struct ObservationQuery {
    /// Comma-joined taxon identifiers; empty means no species filter
    pub taxons: String,

    /// Geographic area code filter
    pub areas: String,

    /// Observation date lower bound, "DD.MM.YYYY"
    pub from_date: Option<String>,

    /// WKT polygon spatial filter
    pub polygon: Option<String>,
}

impl ObservationQuery {
    /// Build the query from the run configuration and the resolved taxon set
    pub fn from_config(config: &ExportConfig, taxons: String) -> Self {
        Self {
            taxons,
            areas: config.areas.clone(),
            from_date: config.from_date.clone(),
            polygon: config.polygon.clone(),
        }
    }
}

impl ApiClient {
    /// Create a new API client with the fixed per-request timeout
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Search taxa by scientific name
    pub async fn search_taxa(&self, term: &str) -> Result<Vec<TaxonHit>> {
        let url = endpoints::taxon_search_url(&self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("term", term)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ExportError::unexpected_response("taxon search", e))
    }

    /// Fetch one page of the observations list.
    ///
    /// A `page_index` of `None` requests the first page; the response carries
    /// the total page count used to drive pagination.
    pub async fn list_observations(
        &self,
        query: &ObservationQuery,
        page_index: Option<u32>,
    ) -> Result<ObservationPage> {
        let url = endpoints::observations_list_url(&self.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("Taxons", query.taxons.clone()),
            ("Areas", query.areas.clone()),
            ("pageSize", PAGE_SIZE.to_string()),
        ];

        if let Some(ref from_date) = query.from_date {
            params.push(("FromDate", from_date.clone()));
        }

        if let Some(ref polygon) = query.polygon {
            params.push(("filter.wktPolygon", polygon.clone()));
        }

        if let Some(index) = page_index {
            params.push(("pageIndex", index.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ExportError::unexpected_response("observations list", e))
    }
}
