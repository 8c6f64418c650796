use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}};
use toml;
use std::sync::OnceLock;

pub const CONFIG_PATH: &str = "config.toml";
pub const DOTENV_PATH: &str = "./env/.env";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigLoadingError {
    #[error("Failed to read the config ({path}): {reason}")]
    FailedToReadConfig { path: String, reason: String },

    #[error("Failed to parse the config: {0}")]
    FailedToParseConfig(#[from] toml::de::Error),

    #[error("Environment variable {name} holds an invalid value: {value}")]
    InvalidEnvOverride { name: &'static str, value: String }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub auth: AuthConfig
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    #[default]
    Mysql,
    Sqlite
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub driver: DatabaseDriver,

    #[serde(default)]
    pub host: String,
    pub port: Option<u16>,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    // for sqlite this is the path of the database file
    pub database: String
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    pub secret: Option<String>,

    #[serde(default = "default_inactivity_minutes")]
    pub inactivity_minutes: i64
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            inactivity_minutes: default_inactivity_minutes()
        }
    }
}

/// How `POST /auth` decides that the submitted identifier belongs to the product
/// found by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCheck {
    /// Legacy behavior: the name lookup alone authenticates, `id` only has to be non-empty.
    NameOnly,

    #[default]
    NameAndId
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub identifier_check: IdentifierCheck
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_inactivity_minutes() -> i64 {
    60
}

impl Config {
    pub fn load() -> Result<Self, ConfigLoadingError> {
        // A missing .env is fine, credentials may come from the real environment or config.toml
        if let Err(err) = dotenvy::from_path(DOTENV_PATH) {
            log::debug!("No dotenv file loaded from {}: {}", DOTENV_PATH, err);
        }

        let mut config = Self::from_file(Path::new(CONFIG_PATH))?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigLoadingError> {
        let config_str = fs::read_to_string(path).map_err(|err| ConfigLoadingError::FailedToReadConfig {
            path: path.display().to_string(),
            reason: err.to_string()
        })?;

        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigLoadingError> {
        let config: Config = toml::from_str(config_str)?;

        Ok(config)
    }

    /// Overrides `[database]` values with `DB_*` variables, `lookup` is `std::env::var` outside of tests.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigLoadingError>
    where F: Fn(&str) -> Option<String>
    {
        let db = &mut self.database;

        if let Some(host) = lookup("DB_HOST") { db.host = host; }
        if let Some(user) = lookup("DB_USER") { db.user = user; }
        if let Some(password) = lookup("DB_PASSWORD") { db.password = password; }
        if let Some(database) = lookup("DB_DATABASE") { db.database = database; }

        if let Some(port) = lookup("DB_PORT") {
            let parsed = port.parse::<u16>()
                .map_err(|_| ConfigLoadingError::InvalidEnvOverride { name: "DB_PORT", value: port.clone() })?;
            db.port = Some(parsed);
        }

        if let Some(driver) = lookup("DB_DRIVER") {
            db.driver = match driver.to_lowercase().as_str() {
                "mysql" => DatabaseDriver::Mysql,
                "sqlite" => DatabaseDriver::Sqlite,
                _ => return Err(ConfigLoadingError::InvalidEnvOverride { name: "DB_DRIVER", value: driver })
            };
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn get_config() -> Result<&'static Config, ConfigLoadingError> {
    static CONFIG: OnceLock<Result<Config, ConfigLoadingError>> = OnceLock::new();

    let result = CONFIG.get_or_init(|| {
        Config::load()
    });

    match result {
        Ok(config) => Ok(config),
        Err(err) => Err(err.clone())
    }
}
