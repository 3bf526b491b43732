//! Configuration management for kona.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KonaError, Result};
use crate::store::ObservationColumn;

/// Command-line arguments for kona
#[derive(Parser, Debug)]
#[command(name = "kona")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database holding the station and measurement tables
    #[arg(env = "KONA_DATABASE")]
    pub database: Option<PathBuf>,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "KONA_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "KONA_PORT")]
    pub port: Option<u16>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "KONA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KONA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Enable debug mode (forces the debug log level)
    #[arg(long)]
    pub debug: bool,

    /// Column reported as `Tobs` by /api/v1.0/tobs (precipitation, temperature)
    #[arg(long, env = "KONA_TOBS_SOURCE")]
    pub tobs_source: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Data access configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the SQLite database
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Column backing the `Tobs` field of the tobs endpoint
    #[serde(default = "default_tobs_source")]
    pub tobs_source: String,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build a configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment variables
        if let Some(database) = args.database {
            config.data.database_path = database;
        }
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        if let Some(tobs_source) = args.tobs_source {
            config.data.tobs_source = tobs_source;
        }
        if args.debug {
            config.log_level = "debug".to_string();
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.data = other.data;
        self.log_level = other.log_level;
    }

    /// Column the tobs endpoint reads its values from
    pub fn tobs_column(&self) -> Result<ObservationColumn> {
        self.data.tobs_source.parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(KonaError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(KonaError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.data.database_path.as_os_str().is_empty() {
            return Err(KonaError::Config {
                message: "Database path cannot be empty".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(KonaError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.tobs_column()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            tobs_source: default_tobs_source(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("hawaii.sqlite")
}

fn default_tobs_source() -> String {
    "precipitation".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
