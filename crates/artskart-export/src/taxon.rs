//! Taxon resolution
//!
//! Maps species scientific names to Artskart taxon identifiers via the taxon
//! search endpoint.

use crate::api::ApiClient;
use crate::error::{ExportError, Result};
use tracing::{debug, warn};

/// Resolve a single scientific name to a taxon identifier.
///
/// The first search candidate whose `ScientificName` equals the term exactly
/// (case-sensitive, no fuzzy matching) wins. Returns `None` when no
/// candidate matches.
pub async fn resolve_term(client: &ApiClient, term: &str) -> Result<Option<String>> {
    let hits = client.search_taxa(term).await?;

    for hit in hits {
        if hit.scientific_name.as_deref() == Some(term) {
            let id = hit.int_id.ok_or_else(|| {
                ExportError::unexpected_response(
                    "taxon search",
                    format!("candidate for '{}' has no IntId", term),
                )
            })?;
            return Ok(Some(id.to_string()));
        }
    }

    Ok(None)
}

/// Resolve every loaded term, dropping unmatched names with a warning.
///
/// Output order follows input order; duplicate identifiers are kept. The
/// resulting list is never longer than the input. Network or decode failures
/// are fatal.
pub async fn resolve_terms(client: &ApiClient, terms: &[String]) -> Result<Vec<String>> {
    let mut ids = Vec::with_capacity(terms.len());

    for term in terms {
        match resolve_term(client, term).await? {
            Some(id) => {
                debug!(term = %term, taxon_id = %id, "Resolved species term");
                ids.push(id);
            },
            None => warn!(term = %term, "Species term not found, skipping"),
        }
    }

    Ok(ids)
}
