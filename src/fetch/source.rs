//! Where a collection is read from.

use std::fmt;
use std::path::PathBuf;

/// Location of a JSON collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Remote document fetched with a GET request.
    Http(String),
    /// Local JSON file.
    File(PathBuf),
}

impl DataSource {
    /// Interpret a location string.
    ///
    /// `http://` and `https://` locations are remote; anything else is a
    /// local path, with an optional `file://` prefix.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Http(location.to_string())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            DataSource::File(PathBuf::from(path))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl std::str::FromStr for DataSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DataSource::parse(s))
    }
}
