use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pixfeed::api::IllustApi;
use pixfeed::app::config::{Config, PathOpt, StrOpt, USizeOpt};
use pixfeed::app::list::RefreshState;
use pixfeed::app::{PagedList, illust_cards};
use pixfeed::log::Log;
use pixfeed::net::Net;

use pixfeed::{ArcPath, ArcStr};

#[derive(Parser)]
#[command(name = "pixfeed")]
#[command(about = "A CLI tool for browsing illustration feeds page by page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the feed, following its pages
    Feed {
        /// Feed to read instead of the configured one
        #[arg(short, long)]
        url: Option<String>,
        /// Maximum number of pages to print
        #[arg(short, long, default_value = "1")]
        pages: usize,
    },
    /// Print the configuration file location and its values
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let home = std::env::var("HOME").context("Reading HOME")?;
    let config_path = Path::new(&home)
        .join(".config")
        .join("pixfeed")
        .join("config.toml");
    let config_path = ArcPath::from(config_path.as_path());

    let config = Config::spawn(config_path.clone());
    config.load_or_init().await?;

    let log = Log::spawn(
        config.log_level().await?,
        config.usize(USizeOpt::MaxAge).await?,
        config.path(PathOpt::LogDir).await?,
    )
    .await?;
    log.collect_garbage().await;
    log.info("app", "Starting pixfeed");

    let result = match cli.command {
        Commands::Feed { url, pages } => handle_feed_command(&config, &log, url, pages).await,
        Commands::Config => handle_config_command(&config, &config_path).await,
    };

    if let Err(err) = &result {
        log.error("app", format!("{err:#}"));
    }
    let flushed = log.flush().await.context("Flushing the log");
    result.and(flushed)
}

/// Handle the feed command by loading pages until `pages` were printed or the
/// feed ends
async fn handle_feed_command(
    config: &Config,
    log: &Log,
    url: Option<String>,
    pages: usize,
) -> anyhow::Result<()> {
    let feed_url = match url {
        Some(url) => ArcStr::from(url),
        None => config.str(StrOpt::FeedUrl).await?,
    };
    println!("Fetching {feed_url}...");

    let net = Net::spawn(config.clone(), log.clone()).await?;
    let api = IllustApi::spawn(net, log.clone(), feed_url);
    let list = PagedList::spawn(api, illust_cards, log.clone());

    let mut state = list.wait_settled().await?;
    let mut printed = 0;
    let mut page = 1;

    loop {
        if let RefreshState::Error { cause } = &state {
            anyhow::bail!("Loading page {page} failed: {cause:#}");
        }

        let items = list.items();
        println!();
        println!("Page {page}:");
        for card in items.iter().skip(printed) {
            println!("  {card}");
        }
        printed = items.len();

        if page >= pages || !state.has_next() {
            break;
        }

        list.load_more().await?;
        state = list.state();
        page += 1;
    }

    println!();
    println!("{printed} entries shown");
    if state.has_next() {
        println!("More pages are available, use --pages to see them");
    }

    Ok(())
}

/// Handle the config command to display the current configuration
async fn handle_config_command(config: &Config, path: &Path) -> anyhow::Result<()> {
    println!("Config file: {}", path.display());
    println!("feed_url   = {}", config.str(StrOpt::FeedUrl).await?);
    println!("user_agent = {}", config.str(StrOpt::UserAgent).await?);
    println!("log_dir    = {}", config.path(PathOpt::LogDir).await?.display());
    println!("log_level  = {}", config.log_level().await?);
    println!("max_age    = {}", config.usize(USizeOpt::MaxAge).await?);
    println!("timeout    = {}", config.usize(USizeOpt::Timeout).await?);
    Ok(())
}
