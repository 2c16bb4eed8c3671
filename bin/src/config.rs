//! Global options and the runtime context built from them.

use anyhow::{Context, Result};
use bourse_lib::prelude::*;
use bourse_lib::{DEFAULT_FRESHNESS, load_language};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Options shared by every command.
#[derive(Args, Debug)]
pub(crate) struct GlobalOptions {
    /// Data source: base URL or directory holding exchange.json, metadata.json, candle.json
    #[arg(long, env = "BOURSE_DATA", global = true, value_name = "URL|DIR",
          default_value = bourse_lib::DEFAULT_BASE_URL)]
    pub(crate) data: DataSource,

    /// Cache directory. Defaults to the platform cache directory.
    #[arg(long, env = "BOURSE_CACHE_DIR", global = true, value_name = "DIR")]
    pub(crate) cache_dir: Option<PathBuf>,

    /// Maximum total size of cached data in bytes. When full, the written
    /// key's family is evicted and the write retried once.
    #[arg(long, env = "BOURSE_CACHE_QUOTA", global = true, value_name = "BYTES")]
    pub(crate) cache_quota: Option<u64>,

    /// Keep the cache in memory for this run only
    #[arg(long, global = true, conflicts_with = "cache_dir")]
    pub(crate) ephemeral: bool,

    /// Maximum age of cached data in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = DEFAULT_FRESHNESS.as_secs())]
    pub(crate) max_age: u64,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = 10)]
    pub(crate) timeout: u64,

    /// UI language (en, de). Defaults to the saved preference.
    #[arg(long, global = true)]
    pub(crate) lang: Option<Language>,

    /// Ignore cached data and fetch again
    #[arg(long, global = true)]
    pub(crate) refresh: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    /// Quiet mode (suppress spinners and warnings)
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

impl GlobalOptions {
    /// Default tracing filter derived from `-v` and `-q`.
    pub(crate) const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Everything a command needs to load and render data.
#[derive(Debug)]
pub(crate) struct App {
    pub(crate) session: Session,
    pub(crate) store: CacheStore,
    pub(crate) language: Language,
    pub(crate) quiet: bool,
}

impl App {
    /// Builds the cache store, fetch client and session from `options`.
    pub(crate) fn from_options(options: &GlobalOptions) -> Result<Self> {
        let store = open_store(options)?;

        let config = ClientConfig {
            timeout: Duration::from_secs(options.timeout.max(1)),
            ..ClientConfig::for_source(options.data.clone())
        };
        let client = FetchClient::new(config).context("Failed to create HTTP client")?;

        let loader = CachedLoader::new(store.clone(), Duration::from_secs(options.max_age));
        let mode = if options.refresh {
            CacheMode::Refresh
        } else {
            CacheMode::Use
        };
        let session = Session::new(Arc::new(client), loader).with_mode(mode);

        let language = options.lang.unwrap_or_else(|| load_language(&store));

        tracing::debug!(source = %options.data, ?mode, %language, "session ready");

        Ok(Self {
            session,
            store,
            language,
            quiet: options.quiet,
        })
    }
}

fn open_store(options: &GlobalOptions) -> Result<CacheStore> {
    if options.ephemeral {
        let store = options
            .cache_quota
            .map_or_else(MemoryStore::new, |bytes| MemoryStore::new().with_quota(bytes));
        return Ok(CacheStore::new(Arc::new(store)));
    }

    let path = options
        .cache_dir
        .clone()
        .unwrap_or_else(FileStore::default_path);
    let mut store = FileStore::new(path.clone())
        .with_context(|| format!("Failed to open cache directory {}", path.display()))?;
    if let Some(bytes) = options.cache_quota {
        store = store.with_quota(bytes);
    }

    Ok(CacheStore::new(Arc::new(store)))
}
