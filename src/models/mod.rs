pub mod country;
pub mod search;

pub use country::Country;
pub use search::SearchResult;
