//! bourse CLI - Browse exchange-traded instruments and their candles.

use anyhow::{Context, Result};
use bourse_lib::prelude::*;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod display;

use config::{App, GlobalOptions};

#[derive(Parser)]
#[command(name = "bourse")]
#[command(about = "Browse exchange-traded instruments and their candles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// List instruments (6 per page)
    List {
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by type (stock, crypto, etc, etf, fund, index, commodity, mutual, all)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// List the instrument types available as filters
    Types,

    /// Show instrument details
    Detail {
        /// Instrument symbol (e.g., AAPL, BTC)
        symbol: Symbol,
    },

    /// Show the candle series of an instrument
    Candle {
        /// Instrument symbol (e.g., AAPL, BTC)
        symbol: Symbol,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Open a route: /, /details/<symbol> or /candle/<symbol>
    Open {
        /// Route path
        route: String,
    },

    /// Browse interactively
    Browse,

    /// Show or set the UI language
    Language {
        /// New language (en, de)
        language: Option<Language>,
    },

    /// Inspect or clear the local cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Actions on the local cache.
#[derive(Subcommand)]
enum CacheAction {
    /// List cached entries and their age
    List,

    /// Remove cached entries
    Clear {
        /// Only remove this key family (e.g., candlesData, detail, exchangeData)
        #[arg(long)]
        prefix: Option<String>,
    },
}

fn init_tracing(options: &GlobalOptions) -> Result<()> {
    let filter = std::env::var("BOURSE_LOG").unwrap_or_else(|_| options.log_level().to_string());
    let env_filter =
        tracing_subscriber::EnvFilter::try_new(filter).context("Invalid BOURSE_LOG filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    init_tracing(&cli.options)?;
    let app = App::from_options(&cli.options)?;

    match command {
        Commands::List { search, kind, page } => {
            commands::list::list_instruments(&app, search.as_deref(), kind.as_deref(), page).await
        }
        Commands::Types => {
            commands::types::list_types(&app);
            Ok(())
        }
        Commands::Detail { symbol } => commands::detail::show_detail(&app, symbol).await,
        Commands::Candle { symbol, page } => {
            commands::candle::show_candles(&app, symbol, page).await
        }
        Commands::Open { route } => commands::open::open_route(&app, &route).await,
        Commands::Browse => commands::browse::browse(&app).await,
        Commands::Language { language } => commands::language::language(&app, language),
        Commands::Cache { action } => match action {
            CacheAction::List => commands::cache::list_entries(&app),
            CacheAction::Clear { prefix } => commands::cache::clear(&app, prefix.as_deref()),
        },
    }
}
