//! CSV export pipeline
//!
//! Wires the stages together: load species terms, resolve them to taxon
//! identifiers, stream every matching observation, and write the CSV.

use crate::api::{types::OBSERVATION_FIELDS, ApiClient, ObservationQuery};
use crate::config::ExportConfig;
use crate::error::Result;
use crate::observations::fetch_observations;
use crate::taxon::resolve_terms;
use crate::terms::load_terms;
use futures::{pin_mut, TryStreamExt};
use tracing::info;

/// Run the export end to end.
///
/// Rows are written as they stream in, so on a fatal error the output file
/// keeps the header and every row written before the failure.
pub async fn run(config: &ExportConfig) -> Result<()> {
    let terms = load_terms(&config.species_path)?;
    info!(
        terms = terms.len(),
        path = %config.species_path.display(),
        "Loaded species terms"
    );

    let client = ApiClient::new(config.base_url.clone())?;

    let ids = resolve_terms(&client, &terms).await?;
    info!(resolved = ids.len(), "Resolved taxon identifiers");

    let query = ObservationQuery::from_config(config, ids.join(","));

    // The writer owns the file handle; scope guarantees release on both
    // success and error paths.
    let mut writer = csv::Writer::from_path(&config.output_path)?;
    writer.write_record(OBSERVATION_FIELDS)?;

    let observations = fetch_observations(&client, query);
    pin_mut!(observations);

    let mut rows = 0u64;
    while let Some(observation) = observations.try_next().await? {
        writer.write_record(observation.csv_record()?)?;
        rows += 1;
    }
    writer.flush()?;

    info!(rows, path = %config.output_path.display(), "Export complete");
    Ok(())
}
