use crate::models::{Country, SearchResult};
use crate::utils::file::{read_json_file, FileError};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CountryError {
    #[error("Failed to load country codes: {0}")]
    LoadFailed(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("File error: {0}")]
    FileError(#[from] FileError),
}

/// Read-only, ordered list of countries supplied by a JSON document or the
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct CountryService {
    countries: Vec<Country>,
}

impl CountryService {
    pub async fn new(country_codes_path: &Path) -> Result<Self, CountryError> {
        let countries: Vec<Country> = match read_json_file(country_codes_path).await {
            Ok(countries) => countries,
            Err(FileError::NotFound(path)) => {
                warn!(
                    "Country codes file {} not found, using built-in list",
                    path.display()
                );
                return Ok(Self::with_defaults());
            }
            Err(e) => return Err(e.into()),
        };

        let service = Self::from_countries(countries)?;
        info!(
            "Loaded {} countries from {}",
            service.len(),
            country_codes_path.display()
        );
        Ok(service)
    }

    pub fn from_json(content: &str) -> Result<Self, CountryError> {
        let countries: Vec<Country> = serde_json::from_str(content)?;
        Self::from_countries(countries)
    }

    pub fn with_defaults() -> Self {
        Self {
            countries: Self::create_default_countries(),
        }
    }

    fn from_countries(countries: Vec<Country>) -> Result<Self, CountryError> {
        if countries.is_empty() {
            return Err(CountryError::LoadFailed("country list is empty".to_string()));
        }
        Ok(Self { countries })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Country> {
        self.countries.get(position)
    }

    /// Pairs a caller-supplied position with its entry.
    pub fn result_at(&self, position: usize) -> SearchResult {
        self.get(position)
            .and_then(|country| SearchResult::found(country.clone(), position))
            .unwrap_or_default()
    }

    fn create_default_countries() -> Vec<Country> {
        vec![
            Country::new("United States", "US", "1", 0),
            Country::new("Canada", "CA", "1", 1).with_area_codes([
                "204", "226", "236", "249", "250", "289", "306", "343", "365", "387", "403",
                "416", "418", "431", "437", "438", "450", "506", "514", "519", "548", "579",
                "581", "587", "604", "613", "639", "647", "672", "705", "709", "742", "778",
                "780", "782", "807", "819", "825", "867", "873", "902", "905",
            ]),
            Country::new("Dominican Republic", "DO", "1", 2)
                .with_area_codes(["809", "829", "849"]),
            Country::new("Puerto Rico", "PR", "1", 3).with_area_codes(["787", "939"]),
            Country::new("Jamaica", "JM", "1", 4).with_area_codes(["876", "658"]),
            Country::new("Russia", "RU", "7", 0),
            Country::new("Kazakhstan", "KZ", "7", 1).with_area_codes(["33", "7"]),
            Country::new("France", "FR", "33", 0),
            Country::new("Spain", "ES", "34", 0),
            Country::new("Italy", "IT", "39", 0),
            Country::new("Vatican City", "VA", "39", 1).with_area_codes(["06698"]),
            Country::new("United Kingdom", "GB", "44", 0),
            Country::new("Guernsey", "GG", "44", 1)
                .with_area_codes(["1481", "7781", "7839", "7911"]),
            Country::new("Germany", "DE", "49", 0),
            Country::new("Brazil", "BR", "55", 0),
            Country::new("Australia", "AU", "61", 0),
            Country::new("Japan", "JP", "81", 0),
            Country::new("China", "CN", "86", 0),
            Country::new("India", "IN", "91", 0),
            Country::new("Mexico", "MX", "52", 0),
        ]
    }
}
