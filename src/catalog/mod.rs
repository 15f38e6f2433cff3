//! Catalog feature - the searchable, sortable product list.
//!
//! This module holds the product data model, the pure filter/sort
//! operations, and the catalog screen state that the UI renders from.

pub mod query;
pub mod search;
pub mod state;
pub mod ui;

use serde::{Deserialize, Deserializer};

pub use query::{compare_stars, filter_by_brand, sort_by_stars, SortOrder};
pub use search::SearchInput;
pub use state::{CatalogRow, CatalogState};

/// Rating text meaning "no rating available".
pub const NO_RATING: &str = "NAN";

/// Number of stars in a rating widget.
pub const MAX_STARS: u8 = 5;

/// A single noodle product from the product collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Product {
    /// Manufacturer brand.
    #[serde(rename = "Brand", default, deserialize_with = "text_or_number")]
    pub brand: String,
    /// Product variety name.
    #[serde(rename = "Variety", default, deserialize_with = "text_or_number")]
    pub variety: String,
    /// Country of origin.
    #[serde(rename = "Country", default, deserialize_with = "text_or_number")]
    pub country: String,
    /// Rating as text, possibly the `NAN` sentinel.
    #[serde(rename = "Stars", default, deserialize_with = "text_or_number")]
    pub stars: String,
    /// Packaging style (cup, pack, bowl...).
    #[serde(rename = "Style", default)]
    pub style: Option<String>,
}

impl Product {
    /// Create a product with the fields shown on a card.
    pub fn new(
        brand: impl Into<String>,
        variety: impl Into<String>,
        country: impl Into<String>,
        stars: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            variety: variety.into(),
            country: country.into(),
            stars: stars.into(),
            style: None,
        }
    }

    /// Country, followed by the packaging style when the dataset has one.
    pub fn origin(&self) -> String {
        match self.style.as_deref().map(str::trim) {
            Some(style) if !style.is_empty() => format!("{} · {}", self.country, style),
            _ => self.country.clone(),
        }
    }

    /// Number of filled stars for this product's rating.
    pub fn filled_stars(&self) -> u8 {
        filled_stars(&self.stars)
    }
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}

/// A single entry of the image collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageRecord {
    /// Image reference (URL or local path).
    #[serde(rename = "Image", default)]
    pub image: String,
}

impl ImageRecord {
    /// Create an image record.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

/// Compute how many of the five stars are filled for a rating text.
///
/// The sentinel and anything that is not a number count as zero. Star `i`
/// is filled when `i < value`, so fractional ratings round up.
pub fn filled_stars(stars: &str) -> u8 {
    let trimmed = stars.trim();
    if trimmed.eq_ignore_ascii_case(NO_RATING) {
        return 0;
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return 0;
    };
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (0..MAX_STARS).filter(|&i| f64::from(i) < value).count() as u8
}

fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
        Null,
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
        TextOrNumber::Null => String::new(),
    })
}
