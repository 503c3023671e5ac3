use clap::Parser;
use swapi_favorites_api::cli::{self, Cli};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    let config = swapi_favorites_api::config::config();
    cli::init_tracing(config);

    let cli = Cli::parse();
    if let Err(e) = cli::run(cli, config).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
