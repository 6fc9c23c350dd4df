//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use twlc_domain::LoggerConfig;

const PROJECT_CONFIG_FILES: [&str; 2] = ["twlc.toml", ".twlc.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TWLC_` environment variables (`TWLC_LOGGER__WITH_TIMESTAMP=false`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./twlc.toml` or `./.twlc.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/twlc/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("TWLC_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/twlc/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("twlc").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Render a resolved configuration as a `[logger]` TOML table
    pub fn to_toml(config: &LoggerConfig) -> Result<String, toml::ser::Error> {
        #[derive(serde::Serialize)]
        struct Wrapper<'a> {
            logger: &'a LoggerConfig,
        }

        toml::to_string_pretty(&Wrapper { logger: config })
    }
}
