//! API response types
//!
//! Matches the field casing of the Artskart backend. Every field is optional
//! so that shape drift in a single record surfaces as a targeted error
//! instead of a blanket decode failure.

use crate::error::{ExportError, Result};
use serde::Deserialize;
use serde_json::Value;

/// One candidate returned by the taxon search endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxonHit {
    /// Scientific name of the candidate taxon
    pub scientific_name: Option<String>,

    /// Numeric taxon identifier
    pub int_id: Option<i64>,
}

/// One page of results from the observations list endpoint
#[derive(Debug, Deserialize)]
pub struct ObservationPage {
    /// Records on this page, in server order
    #[serde(rename = "Observations")]
    pub observations: Vec<Observation>,

    /// Total number of pages matching the query
    #[serde(rename = "TotalPages")]
    pub total_pages: u32,
}

/// CSV column names, in output order.
pub const OBSERVATION_FIELDS: [&str; 18] = [
    "Id",
    "ScientificName",
    "TaxonId",
    "Sex",
    "Status",
    "Count",
    "Behavior",
    "Locality",
    "Habitat",
    "Latitude",
    "Longitude",
    "Precision",
    "East",
    "North",
    "Projection",
    "Institution",
    "Collector",
    "CollectedDate",
];

/// A single observation record.
///
/// Only the projected fields are decoded; anything else in the payload is
/// ignored. `None` means the key was absent from the record,
/// `Some(Value::Null)` that it was present but null.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Observation {
    pub id: Option<Value>,
    pub scientific_name: Option<Value>,
    pub taxon_id: Option<Value>,
    pub sex: Option<Value>,
    pub status: Option<Value>,
    pub count: Option<Value>,
    pub behavior: Option<Value>,
    pub locality: Option<Value>,
    pub habitat: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub precision: Option<Value>,
    pub east: Option<Value>,
    pub north: Option<Value>,
    pub projection: Option<Value>,
    pub institution: Option<Value>,
    pub collector: Option<Value>,
    pub collected_date: Option<Value>,
}

impl Observation {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "Id" => self.id.as_ref(),
            "ScientificName" => self.scientific_name.as_ref(),
            "TaxonId" => self.taxon_id.as_ref(),
            "Sex" => self.sex.as_ref(),
            "Status" => self.status.as_ref(),
            "Count" => self.count.as_ref(),
            "Behavior" => self.behavior.as_ref(),
            "Locality" => self.locality.as_ref(),
            "Habitat" => self.habitat.as_ref(),
            "Latitude" => self.latitude.as_ref(),
            "Longitude" => self.longitude.as_ref(),
            "Precision" => self.precision.as_ref(),
            "East" => self.east.as_ref(),
            "North" => self.north.as_ref(),
            "Projection" => self.projection.as_ref(),
            "Institution" => self.institution.as_ref(),
            "Collector" => self.collector.as_ref(),
            "CollectedDate" => self.collected_date.as_ref(),
            _ => None,
        }
    }

    /// Project the record into the fixed CSV column order.
    ///
    /// A field absent from the record is fatal; there is no default
    /// substitution.
    pub fn csv_record(&self) -> Result<Vec<String>> {
        OBSERVATION_FIELDS
            .iter()
            .map(|&name| {
                self.field(name)
                    .map(stringify)
                    .ok_or(ExportError::MissingField(name))
            })
            .collect()
    }
}

/// String form of a JSON value for a CSV cell. Strings are written verbatim,
/// null becomes an empty cell, everything else uses its JSON rendering.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
