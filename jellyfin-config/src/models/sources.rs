use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::util::{parse_bool_var, parse_var, string_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub auth: FileAuthConfig,
    #[serde(default)]
    pub client: FileClientConfig,
    #[serde(default)]
    pub session: FileSessionConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileAuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSessionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_active_within_seconds: Option<u64>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub ssl: Option<bool>,
    pub path: Option<String>,
    pub token: Option<String>,
    pub user_id: Option<Uuid>,
    pub client_name: Option<String>,
    pub device_name: Option<String>,
    pub device_id: Option<String>,
    pub refresh_seconds: Option<u64>,
    pub client_active_within_seconds: Option<u64>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`EnvConfig::gather`] but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config_path: string_var(&lookup, "JELLYFIN_CONFIG")
                .map(PathBuf::from),
            host: string_var(&lookup, "JELLYFIN_HOST"),
            port: parse_var(&lookup, "JELLYFIN_PORT"),
            ssl: parse_bool_var(&lookup, "JELLYFIN_SSL"),
            path: string_var(&lookup, "JELLYFIN_PATH"),
            token: string_var(&lookup, "JELLYFIN_TOKEN"),
            user_id: parse_var(&lookup, "JELLYFIN_USER_ID"),
            client_name: string_var(&lookup, "JELLYFIN_CLIENT_NAME"),
            device_name: string_var(&lookup, "JELLYFIN_DEVICE_NAME"),
            device_id: string_var(&lookup, "JELLYFIN_DEVICE_ID"),
            refresh_seconds: parse_var(&lookup, "JELLYFIN_REFRESH_SECONDS"),
            client_active_within_seconds: parse_var(
                &lookup,
                "JELLYFIN_CLIENT_ACTIVE_WITHIN_SECONDS",
            ),
        }
    }
}
