//! Brand filtering and rating sort.

use super::Product;
use std::cmp::Ordering;

/// Direction of a rating sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest rating text first.
    Ascending,
    /// Largest rating text first.
    Descending,
}

impl SortOrder {
    /// Menu label for this order.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort by rating Ascending",
            SortOrder::Descending => "Sort by rating Descending",
        }
    }

    /// Short name used in the status bar and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order '{}' (expected asc or desc)", other)),
        }
    }
}

/// Select the products whose brand contains `query`, ignoring case.
///
/// The brand is trimmed before matching; the query is not. An empty query
/// returns the full collection in its original order.
pub fn filter_by_brand<T>(full: &[T], query: &str) -> Vec<T>
where
    T: AsRef<Product> + Clone,
{
    if query.is_empty() {
        return full.to_vec();
    }

    let needle = query.to_uppercase();
    full.iter()
        .filter(|item| item.as_ref().brand.trim().to_uppercase().contains(&needle))
        .cloned()
        .collect()
}

/// Compare two rating texts the way the catalog sorts them.
///
/// This is plain text comparison of the lowercased values, not numeric:
/// "10" sorts before "2", and the `NAN` sentinel sorts after every digit.
pub fn compare_stars(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Reorder a view by rating text. The sort is stable.
pub fn sort_by_stars<T: AsRef<Product>>(view: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Ascending => {
            view.sort_by(|a, b| compare_stars(&a.as_ref().stars, &b.as_ref().stars))
        },
        SortOrder::Descending => {
            view.sort_by(|a, b| compare_stars(&b.as_ref().stars, &a.as_ref().stars))
        },
    }
}
