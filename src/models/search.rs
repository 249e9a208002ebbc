use crate::models::country::Country;
use serde::{Deserialize, Serialize};

/// Outcome of looking a country up in an ordered list.
///
/// The constructors here pair a missing `item` with `index == -1`. The fields
/// stay public and deserialization does not check the pairing, so a producer
/// using another convention can still round-trip its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Country>,
    pub index: i64,
}

impl SearchResult {
    pub const NOT_FOUND_INDEX: i64 = -1;

    /// `None` when `position` does not fit the wire index.
    pub fn found(country: Country, position: usize) -> Option<Self> {
        let index = i64::try_from(position).ok()?;
        Some(Self {
            item: Some(country),
            index,
        })
    }

    pub fn not_found() -> Self {
        Self {
            item: None,
            index: Self::NOT_FOUND_INDEX,
        }
    }

    pub fn is_match(&self) -> bool {
        self.item.is_some()
    }

    /// Position of the match, if there is one.
    pub fn position(&self) -> Option<usize> {
        match self.item {
            Some(_) => usize::try_from(self.index).ok(),
            None => None,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::not_found()
    }
}
