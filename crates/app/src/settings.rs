//! Handles settings for the application. Configuration is read from
//! `settings.toml` (or `--config <path>`) and overridden by environment
//! variables such as `EXPENSE_LEDGER__DATABASE__URL`.
//!
//! `DATABASE_URL`, when set, always wins for the connection string.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use ledger::PoolConfig;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const ENV_PREFIX: &str = "EXPENSE_LEDGER";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub categories_path: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8000,
            categories_path: "categories.json".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub database: PoolConfig,
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "expense_ledger", about = "Expense ledger HTTP service")]
struct Args {
    /// Config file path (TOML); the extension may be omitted.
    #[arg(long)]
    config: Option<String>,
    /// Database connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings = Self::load(config_path, environment())?;

        if let Some(url) = args.database_url {
            settings.database.url = url;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }

        Ok(settings)
    }

    fn load(config_path: &str, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

/// `EXPENSE_LEDGER__<SECTION>__<KEY>`
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
