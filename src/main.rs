use std::path::PathBuf;

use clap::Parser;

use moto_scrape_lib::config::AppConfig;
use moto_scrape_lib::scraping;

#[derive(Parser)]
#[command(name = "moto-scrape", about = "Scrape Australian motorcycle events into a JSON feed")]
struct Cli {
    /// JSON config file (missing file means defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Where to write the events JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,
    /// Print the configured sources and exit
    #[arg(long)]
    list_sources: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.list_sources {
        for source in scraping::list_sources() {
            println!("{:<18} {:<34} {}", source.id, source.name, source.url);
        }
        return Ok(());
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }

    let envelope = moto_scrape_lib::run(&config)?;
    println!(
        "Saved {} events to {} ({} source errors)",
        envelope.total_events,
        config.output_path.display(),
        envelope.errors.len()
    );
    Ok(())
}
