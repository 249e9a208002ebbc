use crate::config::Config;
use crate::services::country::CountryService;
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "dialcodes",
    about = "Prints country dial-code records as JSON",
    version,
    author
)]
pub struct Args {
    /// Country list to load instead of COUNTRY_CODES_PATH
    #[arg(short, long)]
    pub countries: Option<PathBuf>,

    /// Print the lookup result for this list position instead of the whole list
    #[arg(short, long)]
    pub index: Option<usize>,

    #[arg(long)]
    pub pretty: bool,
}

/// Loads the configured country list and renders what `args` asks for as JSON.
pub async fn render(config: &Config, args: &Args) -> anyhow::Result<String> {
    let path = &config.country_codes_path;
    let country_service = CountryService::new(path).await.with_context(|| {
        format!(
            "Failed to initialize country service from {}",
            path.display()
        )
    })?;

    match args.index {
        Some(position) => {
            let result = country_service.result_at(position);
            debug!("Position {} matched: {}", position, result.is_match());
            to_json(&result, args.pretty)
        }
        None => to_json(country_service.countries(), args.pretty),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
