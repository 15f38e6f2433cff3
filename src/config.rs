//! Runtime configuration.

use crate::fetch::DataSource;
use std::time::Duration;

/// Default location of the image collection.
pub const DEFAULT_IMAGES_URL: &str =
    "https://accubits-image-assets.s3.ap-southeast-1.amazonaws.com/john/noodlesec253ad.json";

/// Default location of the product collection.
pub const DEFAULT_PRODUCTS_URL: &str =
    "https://accubits-image-assets.s3.ap-southeast-1.amazonaws.com/john/TopRamen8d30951.json";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where to read the catalog from and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Image collection location.
    pub images: DataSource,
    /// Product collection location.
    pub products: DataSource,
    /// Timeout for every HTTP request.
    pub timeout: Duration,
    /// Whether row images are loaded at all.
    pub probe_images: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            images: DataSource::parse(DEFAULT_IMAGES_URL),
            products: DataSource::parse(DEFAULT_PRODUCTS_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            probe_images: true,
        }
    }
}
