pub mod error;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::models::ClientConfig;
use crate::models::sources::{EnvConfig, FileConfig};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

const ENV_PREFIX: &str = "JELLYFIN_";

/// Outcome of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ClientConfig,
    pub warnings: ConfigWarnings,
}

/// Resolves a [`ClientConfig`] from defaults, a TOML file and the
/// environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    vars: Option<BTreeMap<String, String>>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// TOML file to layer over the defaults. Overrides `JELLYFIN_CONFIG`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// `.env` file whose entries fill in variables the process lacks.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Reads variables from `vars` instead of the process environment.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    pub fn load(self) -> Result<ConfigLoad, ConfigLoadError> {
        let mut vars = match self.vars {
            Some(vars) => vars,
            None => std::env::vars()
                .filter(|(key, _)| key.starts_with(ENV_PREFIX))
                .collect(),
        };

        let env_file_loaded = match self.env_file.as_deref() {
            Some(path) => {
                merge_env_file(path, &mut vars)?;
                true
            }
            None => false,
        };

        let env = EnvConfig::from_lookup(|name| vars.get(name).cloned());
        let config_path = self.config_path.or_else(|| env.config_path.clone());
        let file = match config_path.as_deref() {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let mut config = ClientConfig::resolve(file, env);
        config.metadata.config_path = config_path;
        config.metadata.env_file_loaded = env_file_loaded;

        let warnings = apply_guard_rails(&config)?;
        config
            .base_url()
            .map_err(|source| ConfigLoadError::InvalidServerUrl { source })?;

        for warning in &warnings.items {
            match warning.hint.as_deref() {
                Some(hint) => warn!(hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }
        info!(
            host = %config.server.host,
            port = config.server.port,
            ssl = config.server.ssl,
            config_file = ?config.metadata.config_path,
            env_file_loaded,
            "jellyfin client configuration loaded"
        );

        Ok(ConfigLoad { config, warnings })
    }
}

fn merge_env_file(
    path: &Path,
    vars: &mut BTreeMap<String, String>,
) -> Result<(), ConfigLoadError> {
    for entry in dotenvy::from_path_iter(path)? {
        let (key, value) = entry?;
        if vars.contains_key(&key) {
            debug!(key, "environment already defines variable; .env entry ignored");
            continue;
        }
        vars.insert(key, value);
    }
    Ok(())
}

pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::ConfigFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&contents).map_err(|source| {
        ConfigLoadError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        }
    })
}
