use clap::Parser;
use dialcodes::cli::{render, Args};
use dialcodes::config::Config;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::Level;

const NANP_JSON: &str = r#"[
    { "name": "United States", "iso2": "US", "dialCode": "1", "priority": 1, "areaCodes": null },
    { "name": "Canada", "iso2": "CA", "dialCode": "1", "priority": 2, "areaCodes": ["204", "226"] }
]"#;

fn config_for(path: &Path) -> Config {
    Config {
        country_codes_path: path.to_path_buf(),
        log_level: Level::INFO,
    }
}

fn write_countries(temp_dir: &TempDir, content: &str) -> Result<PathBuf, std::io::Error> {
    let path = temp_dir.path().join("country-codes.json");
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_args_defaults() {
    let args = Args::parse_from(["dialcodes"]);

    assert_eq!(args.countries, None);
    assert_eq!(args.index, None);
    assert!(!args.pretty);
}

#[test]
fn test_args_overrides() {
    let args = Args::parse_from([
        "dialcodes",
        "--countries",
        "/data/countries.json",
        "--index",
        "3",
        "--pretty",
    ]);

    assert_eq!(args.countries, Some(PathBuf::from("/data/countries.json")));
    assert_eq!(args.index, Some(3));
    assert!(args.pretty);
}

#[test]
fn test_args_rejects_negative_index() {
    assert!(Args::try_parse_from(["dialcodes", "--index", "-1"]).is_err());
}

#[tokio::test]
async fn test_render_whole_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_countries(&temp_dir, NANP_JSON)?;
    let args = Args::parse_from(["dialcodes"]);

    let output = render(&config_for(&path), &args).await?;

    assert!(!output.contains('\n'));
    let expected: Value = serde_json::from_str(NANP_JSON)?;
    assert_eq!(serde_json::from_str::<Value>(&output)?, expected);

    Ok(())
}

#[tokio::test]
async fn test_render_index_in_range() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_countries(&temp_dir, NANP_JSON)?;
    let args = Args::parse_from(["dialcodes", "--index", "0"]);

    let output = render(&config_for(&path), &args).await?;

    assert_eq!(
        serde_json::from_str::<Value>(&output)?,
        json!({
            "item": {
                "name": "United States",
                "iso2": "US",
                "dialCode": "1",
                "priority": 1,
                "areaCodes": null
            },
            "index": 0
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_render_index_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_countries(&temp_dir, NANP_JSON)?;
    let args = Args::parse_from(["dialcodes", "--index", "999"]);

    let output = render(&config_for(&path), &args).await?;

    assert_eq!(output, r#"{"index":-1}"#);

    Ok(())
}

#[tokio::test]
async fn test_render_pretty() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_countries(&temp_dir, NANP_JSON)?;
    let args = Args::parse_from(["dialcodes", "--index", "999", "--pretty"]);

    let output = render(&config_for(&path), &args).await?;

    assert_eq!(output, "{\n  \"index\": -1\n}");

    Ok(())
}

#[tokio::test]
async fn test_render_malformed_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_countries(&temp_dir, "{ not json")?;
    let args = Args::parse_from(["dialcodes"]);

    let err = render(&config_for(&path), &args)
        .await
        .expect_err("malformed list should fail");

    assert!(format!("{:#}", err).contains("Failed to initialize country service"));

    Ok(())
}
