//! API endpoint URL builders
//!
//! Helper functions to construct Artskart API endpoint URLs.

/// Build taxon search endpoint URL
pub fn taxon_search_url(base_url: &str) -> String {
    format!("{}/api/taxon/short", base_url)
}

/// Build observations list endpoint URL
pub fn observations_list_url(base_url: &str) -> String {
    format!("{}/api/observations/list", base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxon_search_url() {
        let url = taxon_search_url("https://artskart.artsdatabanken.no/publicapi");
        assert_eq!(
            url,
            "https://artskart.artsdatabanken.no/publicapi/api/taxon/short"
        );
    }

    #[test]
    fn test_observations_list_url() {
        let url = observations_list_url("http://localhost:8000");
        assert_eq!(url, "http://localhost:8000/api/observations/list");
    }
}
