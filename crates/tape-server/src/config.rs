//! Server configuration
//!
//! Values are layered: built-in defaults, then an optional `tapes.{toml,yaml,json}`
//! file (or the one passed with `--config`), then `TAPES_*` environment
//! variables, then command-line flags.

use anyhow::{Context, Result};
use clap::Parser;
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "localhost:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CONFIG_NAME: &str = "tapes";
const ENV_PREFIX: &str = "TAPES";

#[derive(Debug, Parser)]
#[command(name = "tape-server")]
#[command(author, version, about = "Tape catalog HTTP server", long_about = None)]
pub struct Cli {
    /// Address to listen on (host:port)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Log level or tracing filter directive
    #[arg(long)]
    pub log_level: Option<String>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub log_level: String,
}

impl ServerConfig {
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::load_from(
            cli,
            Environment::with_prefix(ENV_PREFIX),
            DEFAULT_CONFIG_NAME,
        )
    }

    /// `default_file` is only consulted when `--config` is not given.
    fn load_from(cli: &Cli, env: Environment, default_file: &str) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::with_name(default_file).required(false),
        };

        let config = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(file)
            .add_source(env)
            .set_override_option("bind_address", cli.bind.clone())?
            .set_override_option("log_level", cli.log_level.clone())?
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Failed to parse configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    fn load(cli: &Cli, vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let dir = tempfile::tempdir().unwrap();
        let default_file = dir.path().join(DEFAULT_CONFIG_NAME);
        ServerConfig::load_from(cli, env(vars), &default_file.to_string_lossy())
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tape-server"]);
        let config = load(&cli, &[]).unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let cli = Cli::parse_from(["tape-server"]);
        let vars = [
            ("TAPES_BIND_ADDRESS", "0.0.0.0:7100"),
            ("TAPES_LOG_LEVEL", "warn"),
            ("OTHER_BIND_ADDRESS", "ignored:1"),
        ];
        let config = load(&cli, &vars).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:7100");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::parse_from(["tape-server", "--bind", "0.0.0.0:9000", "--log-level", "debug"]);
        let config = load(&cli, &[("TAPES_BIND_ADDRESS", "0.0.0.0:7100")]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tapes.toml"),
            "bind_address = \"127.0.0.1:7200\"\nlog_level = \"trace\"\n",
        )
        .unwrap();
        let default_file = dir.path().join(DEFAULT_CONFIG_NAME);

        let cli = Cli::parse_from(["tape-server"]);
        let vars = env(&[("TAPES_LOG_LEVEL", "error")]);
        let config =
            ServerConfig::load_from(&cli, vars, &default_file.to_string_lossy()).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:7200");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:7000\"").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["tape-server", "--config", path.as_str()]);
        let config = load(&cli, &[]).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:7000");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        let cli = Cli::parse_from(["tape-server", "-c", path.as_str(), "-b", "127.0.0.1:7001"]);
        let config = load(&cli, &[]).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:7001");
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let cli = Cli::parse_from(["tape-server", "--config", "/nonexistent/tapes.toml"]);
        assert!(load(&cli, &[]).is_err());
    }
}
