//! Configuration for board deployments.
//!
//! Values are layered with the following priority (highest first):
//! 1. The `TASKBOARD_DATABASE_URL` environment variable
//! 2. A TOML config file
//! 3. Compiled defaults
//!
//! The database URL has no default; it must come from the file or the
//! environment.

use crate::board::adapters::{local_image::LocalImageHost, postgres::BoardPgPool};
use crate::board::ports::ImageHostError;
use camino::{Utf8Path, Utf8PathBuf};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Environment variable overriding `[database] url`.
pub const DATABASE_URL_ENV: &str = "TASKBOARD_DATABASE_URL";

const DEFAULT_POOL_MAX_SIZE: u32 = 8;
const DEFAULT_IMAGE_ROOT: &str = "images";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080/images/";

/// Errors that can occur when loading configuration or building adapters
/// from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Neither the file nor the environment named a database.
    #[error("no database URL configured; set [database] url or {DATABASE_URL_ENV}")]
    MissingDatabaseUrl,

    /// The pool size is zero.
    #[error("database pool_max_size must be at least 1")]
    EmptyPool,

    /// The image base URL does not parse.
    #[error("invalid images.public_base_url: {0}")]
    InvalidPublicBaseUrl(#[from] url::ParseError),

    /// The database pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),

    /// The image directory could not be opened.
    #[error("failed to open image root: {0}")]
    ImageRoot(#[from] ImageHostError),
}

/// Top-level TOML config file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    database: DatabaseFileConfig,
    images: ImagesFileConfig,
}

/// `[database]` section of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DatabaseFileConfig {
    url: Option<String>,
    pool_max_size: Option<u32>,
}

/// `[images]` section of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImagesFileConfig {
    root: Option<Utf8PathBuf>,
    public_base_url: Option<String>,
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    pub pool_max_size: u32,
}

/// Local image hosting settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Directory uploads are written into.
    pub root: Utf8PathBuf,
    /// URL the directory is served under.
    pub public_base_url: Url,
}

/// Fully resolved board configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Database settings.
    pub database: DatabaseConfig,
    /// Image settings.
    pub images: ImageConfig,
}

impl BoardConfig {
    /// Loads configuration from an optional TOML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when the merged values are incomplete or invalid.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let text = match path {
            Some(file_path) => {
                std::fs::read_to_string(file_path).map_err(|source| ConfigError::ReadFile {
                    path: file_path.to_path_buf(),
                    source,
                })?
            }
            None => String::new(),
        };
        Self::from_toml_str(&text, std::env::var(DATABASE_URL_ENV).ok())
    }

    /// Resolves configuration from TOML text and an optional database URL
    /// override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the TOML does not parse or the merged
    /// values are incomplete or invalid.
    pub fn from_toml_str(
        text: &str,
        database_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        Self::resolve(file, database_url_override)
    }

    fn resolve(
        file: ConfigFile,
        database_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = database_url_override
            .filter(|value| !value.trim().is_empty())
            .or(file.database.url)
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        let pool_max_size = file
            .database
            .pool_max_size
            .unwrap_or(DEFAULT_POOL_MAX_SIZE);
        if pool_max_size == 0 {
            return Err(ConfigError::EmptyPool);
        }

        let root = file
            .images
            .root
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_IMAGE_ROOT));
        let public_base_url = Url::parse(
            file.images
                .public_base_url
                .as_deref()
                .unwrap_or(DEFAULT_PUBLIC_BASE_URL),
        )?;

        Ok(Self {
            database: DatabaseConfig { url, pool_max_size },
            images: ImageConfig {
                root,
                public_base_url,
            },
        })
    }

    /// Builds the `PostgreSQL` connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot establish its
    /// initial connections.
    pub fn connect_pool(&self) -> Result<BoardPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.database.url);
        Ok(Pool::builder()
            .max_size(self.database.pool_max_size)
            .build(manager)?)
    }

    /// Opens the local image host rooted at `[images] root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ImageRoot`] when the directory cannot be
    /// opened.
    pub fn open_image_host(&self) -> Result<LocalImageHost, ConfigError> {
        Ok(LocalImageHost::open(
            &self.images.root,
            self.images.public_base_url.clone(),
        )?)
    }
}
