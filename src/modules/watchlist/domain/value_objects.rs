use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort orders the log view offers. Query parameters are free text, so the
/// conversion from strings is total: anything unrecognized falls back to
/// `Unsorted` (stable insertion order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by title
    Title,
    /// Newest additions first
    Date,
    /// Highest user rating first; unrated entries sort last
    Rating,
    /// Watched entries first
    Watched,
    #[default]
    Unsorted,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SortKey::Title => "title",
            SortKey::Date => "date",
            SortKey::Rating => "rating",
            SortKey::Watched => "watched",
            SortKey::Unsorted => "",
        };
        write!(f, "{}", name)
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "title" => SortKey::Title,
            "date" => SortKey::Date,
            "rating" => SortKey::Rating,
            "watched" => SortKey::Watched,
            _ => SortKey::Unsorted,
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}
