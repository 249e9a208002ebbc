use clap::Parser;
use dialcodes::{
    cli::{render, Args},
    config::Config,
    utils::logger::init_logger,
};
use tracing::error;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logger(config.log_level);

    match render(&config, &args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
