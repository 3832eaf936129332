mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kaburesearch_lib::{CachedClient, ResearchConfig};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// Applied on top of `RUST_LOG`.
const LOG_DIRECTIVES: [&str; 2] = ["kaburesearch=info", "kabutan_api=warn"];

#[derive(Parser)]
#[command(name = "kaburesearch")]
#[command(about = "Look up Japanese stock quotes on kabutan.jp")]
struct Cli {
    /// Output format: cards, table, json, csv, markdown
    #[arg(long, default_value = "cards", global = true)]
    output: String,

    /// Pause before each uncached request, in milliseconds (default 1000)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// How long found quotes stay cached, in seconds (default 3600)
    #[arg(long, global = true)]
    cache_ttl_secs: Option<u64>,

    /// How long failed lookups stay cached, in seconds; 0 disables (default 300)
    #[arg(long, global = true)]
    negative_ttl_secs: Option<u64>,

    /// Request timeout in seconds; 0 keeps the HTTP library default
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Quote site base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a comma-separated list of ticker codes
    Search(commands::search::SearchArgs),
    /// Read one code list per line and search each, sharing the cache
    Interactive,
}

impl Cli {
    fn config(&self) -> Result<ResearchConfig> {
        let mut config = ResearchConfig::from_env()?;
        if let Some(ref base_url) = self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(ms) = self.delay_ms {
            config.request_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = self.cache_ttl_secs {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = self.negative_ttl_secs {
            config.negative_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }
}

fn log_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for directive in LOG_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Cards,
    };

    let config = cli.config()?;
    tracing::debug!("using {:?}", config);
    let client = CachedClient::from_config(&config)?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Interactive => commands::interactive::run(&client, &format).await?,
    }

    Ok(())
}
