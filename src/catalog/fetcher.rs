//! Retrieval of TLE catalogs over HTTP.
use reqwest::Client;
use tracing::info;

use super::TleCatalog;
use crate::satloc_errors::SatlocError;

/// CelesTrak group of every Starlink satellite, three-line TLE format.
pub const CELESTRAK_STARLINK_URL: &str =
    "https://celestrak.org/NORAD/elements/gp.php?GROUP=starlink&FORMAT=tle";

/// Download a catalog text.
///
/// Errors
/// ----------
/// * [`SatlocError::ReqwestError`] on transport failures.
/// * [`SatlocError::HttpStatus`] when the server answers with a non-success status.
pub async fn fetch_catalog(url: &str) -> Result<TleCatalog, SatlocError> {
    let response = Client::new().get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SatlocError::HttpStatus(status.as_u16()));
    }

    let text = response.text().await?;
    let catalog = TleCatalog::parse(&text);
    info!(url, satellites = catalog.len(), "catalog downloaded");
    Ok(catalog)
}

/// Blocking variant of [`fetch_catalog`], running it on a dedicated tokio runtime.
pub fn fetch_catalog_blocking(url: &str) -> Result<TleCatalog, SatlocError> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(fetch_catalog(url))
}

#[cfg(test)]
mod fetcher_test {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host() {
        let err = fetch_catalog("http://127.0.0.1:9/starlink.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, SatlocError::ReqwestError(_)));
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_fetch_starlink_group() {
        let catalog = fetch_catalog(CELESTRAK_STARLINK_URL).await.unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.names().iter().all(|n| n.starts_with("STARLINK")));
    }
}
