//! Fetching the image and product collections.
//!
//! Both collections are plain JSON arrays served from a fixed location.
//! [`RemoteCatalog`] reads them over HTTP (or from local files), and
//! [`Loader`] runs the two fetches on a worker thread.

mod loader;
mod source;

pub use loader::{FetchEvent, Loader};
pub use source::DataSource;

use crate::catalog::{ImageRecord, Product};
use crate::config::CatalogConfig;
use crate::error::{RamenError, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Something that can produce the two catalog collections.
pub trait CatalogFetcher: Send + Sync {
    /// Fetch the image collection.
    fn fetch_images(&self) -> Result<Vec<ImageRecord>>;

    /// Fetch the product collection.
    fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// Catalog fetcher backed by HTTP or local JSON files.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: Client,
    images: DataSource,
    products: DataSource,
}

impl RemoteCatalog {
    /// Create a fetcher for the configured sources.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config.timeout)?,
            images: config.images.clone(),
            products: config.products.clone(),
        })
    }

    fn fetch_array<T: DeserializeOwned>(&self, source: &DataSource) -> Result<Vec<T>> {
        let body = match source {
            DataSource::Http(url) => {
                tracing::debug!("GET {}", url);
                let response = self
                    .client
                    .get(url)
                    .header(ACCEPT, "application/json,text/plain,*/*")
                    .send()?;
                let status = response.status();
                if !status.is_success() {
                    return Err(RamenError::status(url.as_str(), status.as_u16()));
                }
                response.text()?
            },
            DataSource::File(path) => {
                tracing::debug!("Reading {}", path.display());
                std::fs::read_to_string(path).map_err(|e| RamenError::file_open(path.clone(), e))?
            },
        };

        serde_json::from_str(&body).map_err(|e| RamenError::parse(source.to_string(), e))
    }
}

impl CatalogFetcher for RemoteCatalog {
    fn fetch_images(&self) -> Result<Vec<ImageRecord>> {
        let images: Vec<ImageRecord> = self.fetch_array(&self.images)?;
        tracing::info!("Fetched {} image records", images.len());
        Ok(images)
    }

    fn fetch_products(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.fetch_array(&self.products)?;
        tracing::info!("Fetched {} products", products.len());
        Ok(products)
    }
}

/// Build the blocking HTTP client shared by the fetchers.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!("ramen/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_for(images: &std::path::Path, products: &std::path::Path) -> CatalogConfig {
        CatalogConfig {
            images: DataSource::File(images.to_path_buf()),
            products: DataSource::File(products.to_path_buf()),
            ..CatalogConfig::default()
        }
    }

    fn write_json(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_reads_local_collections() {
        let dir = tempfile::tempdir().unwrap();
        let images = write_json(&dir, "images.json", r#"[{"Image": "a.png"}, {"Image": "b.png"}]"#);
        let products = write_json(
            &dir,
            "products.json",
            r#"[{"Brand": "Nissin", "Variety": "Cup Noodles", "Country": "Japan", "Stars": "5"}]"#,
        );

        let catalog = RemoteCatalog::new(&config_for(&images, &products)).unwrap();
        assert_eq!(catalog.fetch_images().unwrap().len(), 2);
        let products = catalog.fetch_products().unwrap();
        assert_eq!(products[0].brand, "Nissin");
    }

    #[test]
    fn test_malformed_payload_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let images = write_json(&dir, "images.json", "<html>not json</html>");
        let products = write_json(&dir, "products.json", r#"{"Brand": "not an array"}"#);

        let catalog = RemoteCatalog::new(&config_for(&images, &products)).unwrap();
        assert!(matches!(catalog.fetch_images(), Err(RamenError::Parse { .. })));
        assert!(matches!(catalog.fetch_products(), Err(RamenError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let catalog = RemoteCatalog::new(&config_for(&missing, &missing)).unwrap();
        assert!(matches!(catalog.fetch_images(), Err(RamenError::FileOpen { .. })));
    }
}
