// SPDX-License-Identifier: MPL-2.0
//! One-shot catalog fetch from the photo service.
//!
//! The fetcher owns the HTTP client and the service coordinates. It
//! performs exactly one read per call and maps failures onto the crate
//! error taxonomy: a non-2xx status becomes [`Error::Network`] carrying
//! the status code, an unparsable body becomes [`Error::Parse`]. Retry
//! policy, if any, belongs to the caller.

use crate::catalog::model::{self, Catalog, RawCatalog};
use crate::error::{Error, Result};

/// Default photo service coordinates, used when the config file does
/// not override them.
pub const DEFAULT_BASE_URL: &str = "https://media.coastlinefoundation.org";
pub const DEFAULT_ENDPOINT: &str = "/api/photos.json";

/// Fetches and normalizes the photo catalog.
///
/// Cloning is cheap (the underlying `reqwest::Client` is reference
/// counted), which lets the app hand copies to background tasks.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    client: reqwest::Client,
    base_url: String,
    endpoint: String,
}

impl CatalogFetcher {
    /// Creates a fetcher for the given service base URL and endpoint
    /// path.
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("CoastGallery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            endpoint: endpoint.into(),
        })
    }

    /// The absolute URL the catalog is requested from.
    pub fn catalog_url(&self) -> String {
        model::resolve_url(&self.base_url, &self.endpoint)
    }

    /// Performs the catalog request and returns the normalized catalog.
    pub async fn fetch(&self) -> Result<Catalog> {
        let url = self.catalog_url();
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network {
                status: Some(status.as_u16()),
                message: format!("catalog request to {url} failed"),
            });
        }

        let body = response.bytes().await?;
        decode_catalog(&body, &self.base_url)
    }

    /// Downloads the raw bytes of a single photo.
    ///
    /// Used by the image cache; the URL is expected to be the photo's
    /// resolved `full_url`.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network {
                status: Some(status.as_u16()),
                message: format!("photo request to {url} failed"),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Decodes a catalog response body and normalizes it.
fn decode_catalog(body: &[u8], base_url: &str) -> Result<Catalog> {
    let raw: RawCatalog = serde_json::from_slice(body)?;
    Ok(model::normalize(raw, base_url))
}
