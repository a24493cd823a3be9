use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `gantry.toml`). If no path is provided,
///    it defaults to `"gantry"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `GANTRY__`. Nested structures are accessed using double underscores
///    (e.g., `GANTRY__ENDPOINTS__GREETING__USERNAME`).
///
/// The file source is loaded with key order preserved, so an endpoint table deserialized
/// through this loader keeps its declaration order.
///
/// # Errors
/// Returns an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("gantry"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder().add_source(File::from(effective_path.as_path()).required(true)).add_source(
        Environment::with_prefix("GANTRY")
            .separator("__")
            .convert_case(config::Case::Snake), // Env var overrides (e.g., GANTRY__ENDPOINTS__...)
    );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
