mod app;

pub use app::AppConfig;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Config file stem used when no path is given. The `config` crate probes the
/// supported extensions (`depot.toml`, `depot.json`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "depot";

/// Prefix for environment overrides, e.g. `DEPOT__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "DEPOT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config {
        #[source]
        source: config::ConfigError,
        context: Option<Cow<'static, str>>,
    },
}

pub trait ConfigErrorExt<T> {
    /// Wraps the error with a description of what was being loaded.
    ///
    /// # Errors
    /// Returns the wrapped error.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Loads `T` from a required config file, overlaid with `DEPOT__*` environment variables.
///
/// Nested keys use a double underscore: `DEPOT__REGISTRY__WARN_ON_OVERWRITE=true`
/// maps to `registry.warn_on_overwrite`.
///
/// # Errors
/// Fails if the file (default stem `depot`) is missing, malformed, or does not
/// match the shape of `T`.
///
/// # Example
/// ```rust
/// use depot_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, true)
}

/// Like [`load_config`], but a missing file is not an error: `T` is then built
/// from its serde defaults and the environment alone.
///
/// # Errors
/// Fails if a present file is malformed or any value has the wrong shape.
pub fn load_optional_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, false)
}

fn load<T>(path: Option<impl AsRef<Path>>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading config");

    builder(&effective_path, required)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

fn builder(path: &Path, required: bool) -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from(path).required(required)).add_source(
        Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
    )
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
