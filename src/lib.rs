//! Dialcodes - typed country dial-code records
//!
//! This library provides the `Country` and `SearchResult` value types,
//! along with a read-only loader for ordered country lists.

pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
