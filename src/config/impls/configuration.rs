use std::fs::File;
use std::io::{ErrorKind, Write};
use std::net::SocketAddr;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::metrics_config::MetricsConfig;
use crate::config::structs::performance_config::PerformanceConfig;
use crate::config::structs::qbittorrent_config::QbittorrentConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::server_config::ServerConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            qbittorrent: QbittorrentConfig::default(),
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            metrics: MetricsConfig::default(),
            performance: PerformanceConfig::default(),
            sentry_config: SentryConfig::default(),
            trackers: toml::Table::new(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Picks the configuration path: explicit argument, then `CONFIG_PATH`, then `config.toml`.
    pub fn resolve_path(path: Option<String>) -> String {
        Self::resolve_path_with(path, |key| std::env::var(key).ok())
    }

    pub fn resolve_path_with<F>(path: Option<String>, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = path.filter(|path| !path.trim().is_empty()) {
            return path;
        }
        if let Some(path) = lookup(CONFIG_PATH_ENV_VAR).filter(|path| !path.trim().is_empty()) {
            return path;
        }
        DEFAULT_CONFIG_PATH.to_string()
    }

    pub fn load_from_file(path: Option<String>, create: bool) -> Result<Configuration, CustomError> {
        let path = Self::resolve_path(path);
        let mut config = match Configuration::load_file(&path) {
            Ok(config) => {
                println!("[CONFIG] Loaded configuration from {path}");
                config
            }
            Err(ConfigurationError::IOError(error)) if error.kind() == ErrorKind::NotFound => {
                if create {
                    return Self::create_file(&path);
                }
                println!("[CONFIG] No config file found at {path}, using defaults.");
                println!("[CONFIG] You can start this app using '--create-config' to write one.");
                Configuration::init()
            }
            Err(error) => {
                eprintln!("[ERROR] Unable to load {path}: {error}");
                return Err(CustomError::new("configuration file could not be loaded"));
            }
        };

        config.apply_env_overrides();

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {error}");
            return Err(CustomError::new("configuration is invalid"));
        }
        Ok(config)
    }

    fn create_file(path: &str) -> Result<Configuration, CustomError> {
        eprintln!("Creating config file {path}..");
        let config_toml = toml::to_string(&Configuration::init())
            .map_err(|_| CustomError::new("could not serialize default configuration"))?;
        match Configuration::save_file(path, config_toml) {
            Ok(_) => {
                eprintln!("Please edit {path} and restart, exiting now...");
                Err(CustomError::new("created config file"))
            }
            Err(e) => {
                eprintln!("{path} could not be created, check permissions...");
                eprintln!("{e}");
                Err(CustomError::new("could not create config file"))
            }
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("QBITTORRENT_BASE_URL") {
            self.qbittorrent.base_url = base_url;
        }
        if let Some(username) = lookup("QBITTORRENT_USERNAME") {
            self.qbittorrent.username = username;
        }
        if let Some(password) = lookup("QBITTORRENT_PASSWORD") {
            self.qbittorrent.password = password;
        }
        if let Some(collect) = lookup("QBT_COLLECT_TORRENT_INFO") {
            self.metrics.collect_torrent_info = collect.trim().eq_ignore_ascii_case("true");
        }
        if let Some(port) = lookup("EXPORTER_PORT") {
            match (port.trim().parse::<u16>(), self.server.bind_address.parse::<SocketAddr>()) {
                (Ok(port), Ok(mut address)) => {
                    address.set_port(port);
                    self.server.bind_address = address.to_string();
                }
                _ => eprintln!("[CONFIG] Ignoring EXPORTER_PORT override '{port}'"),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("server.bind_address \"{}\" is not a socket address", self.server.bind_address)));
        }
        if !self.server.metrics_path.starts_with('/') {
            return Err(ConfigurationError::ValidationError(format!("server.metrics_path \"{}\" must start with '/'", self.server.metrics_path)));
        }
        if self.server.threads == 0 {
            return Err(ConfigurationError::ValidationError("server.threads must be at least 1".to_string()));
        }
        if url::Url::parse(&self.qbittorrent.base_url).is_err() {
            return Err(ConfigurationError::ValidationError(format!("qbittorrent.base_url \"{}\" is not a URL", self.qbittorrent.base_url)));
        }
        if let Some((pattern, label)) = self.trackers.iter().find(|(_, label)| !label.is_str()) {
            return Err(ConfigurationError::ValidationError(format!("trackers.\"{pattern}\" must map to a string label, found {}; quote dotted patterns", label.type_str())));
        }
        Ok(())
    }

    /// Returns the `[trackers]` table as ordered `(pattern, label)` pairs.
    /// Non-string labels are rejected by `validate`.
    pub fn tracker_mappings(&self) -> Vec<(String, String)> {
        self.trackers.iter()
            .filter_map(|(pattern, label)| label.as_str().map(|label| (pattern.clone(), label.to_string())))
            .collect()
    }
}
