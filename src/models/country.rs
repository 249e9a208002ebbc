use serde::{Deserialize, Serialize};

/// Telephone metadata for one country or territory.
///
/// Field contents are taken as supplied by the producer. Nothing here checks
/// that `iso2` is two letters or that `dial_code` is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub iso2: String,
    /// Calling prefix without the leading `+`.
    pub dial_code: String,
    /// Rank among countries sharing `dial_code`. Ordering is up to the consumer.
    pub priority: i32,
    /// Always serialized, as `null` when absent.
    #[serde(default)]
    pub area_codes: Option<Vec<String>>,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        iso2: impl Into<String>,
        dial_code: impl Into<String>,
        priority: i32,
    ) -> Self {
        Self {
            name: name.into(),
            iso2: iso2.into(),
            dial_code: dial_code.into(),
            priority,
            area_codes: None,
        }
    }

    pub fn with_area_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.area_codes = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_area_codes(&self) -> bool {
        self.area_codes.is_some()
    }
}
