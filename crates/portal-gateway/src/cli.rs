use clap::{Parser, ValueEnum};
use portal_core::namespace::DEFAULT_NAMESPACE;
use portal_core::Namespace;
use portal_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "PORTAL_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "PORTAL_STORAGE_BACKEND";
pub const DB_PATH_ENV: &str = "PORTAL_DB_PATH";
pub const NAMESPACE_ENV: &str = "PORTAL_NAMESPACE";
pub const YAML_FILE_ENV: &str = "PORTAL_YAML_FILE";
pub const JSON_FILE_ENV: &str = "PORTAL_JSON_FILE";
pub const SEED_DEMO_ENV: &str = "PORTAL_SEED_DEMO";
pub const LOG_FORMAT_ENV: &str = "PORTAL_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DB_PATH: &str = "urlshort.db";

const USAGE_YAML: &str = "YAML file of mappings:
- path: /path
  url: url-redirect";

const USAGE_JSON: &str = r#"JSON file of mappings:
[{"path": "/path", "url": "url-redirect"}]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "redb")]
    Redb,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::Redb => write!(f, "redb"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "portal", about = "Redirects short paths to their registered URLs")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Redb
    )]
    pub storage: StorageBackendArg,

    /// Backing file of the redb store, created if absent.
    #[arg(long, env = DB_PATH_ENV, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    #[arg(long, env = NAMESPACE_ENV, default_value = DEFAULT_NAMESPACE)]
    pub namespace: Namespace,

    #[arg(long, env = YAML_FILE_ENV, help = USAGE_YAML)]
    pub yaml: Option<PathBuf>,

    #[arg(long, env = JSON_FILE_ENV, help = USAGE_JSON)]
    pub json: Option<PathBuf>,

    /// Load the built-in demo mappings before any file.
    #[arg(long, env = SEED_DEMO_ENV)]
    pub seed_demo: bool,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["portal"]).unwrap();

        assert_eq!(cli.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(cli.storage, StorageBackendArg::Redb);
        assert_eq!(cli.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(cli.namespace, Namespace::default());
        assert!(cli.yaml.is_none());
        assert!(cli.json.is_none());
        assert!(!cli.seed_demo);
        assert_eq!(cli.log_format, LogFormatArg::Text);
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "portal",
            "--storage",
            "in-memory",
            "--namespace",
            "links",
            "--yaml",
            "urls.yaml",
            "--json",
            "urls.json",
            "--seed-demo",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(cli.namespace.as_str(), "links");
        assert_eq!(cli.yaml, Some(PathBuf::from("urls.yaml")));
        assert_eq!(cli.json, Some(PathBuf::from("urls.json")));
        assert!(cli.seed_demo);
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }

    #[test]
    fn empty_namespace_is_rejected() {
        assert!(Cli::try_parse_from(["portal", "--namespace", ""]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
