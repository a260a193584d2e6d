use thiserror::Error;

use super::models::ClientConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("server host is empty; set JELLYFIN_HOST or server.host")]
    EmptyHost,
    #[error("server port must be between 1 and 65535")]
    InvalidPort,
    #[error("session refresh interval must be at least one second")]
    ZeroRefreshInterval,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &ClientConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.server.host.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyHost);
    }
    if config.server.port == 0 {
        return Err(ConfigGuardRailError::InvalidPort);
    }
    if config.session.refresh_seconds == 0 {
        return Err(ConfigGuardRailError::ZeroRefreshInterval);
    }

    if config.auth.token.is_none() {
        warnings.push_with_hint(
            "no access token configured; only public endpoints will answer",
            "Set JELLYFIN_TOKEN or auth.token to an API key from the dashboard",
        );
    }

    if config.session.client_active_within_seconds
        < config.session.refresh_seconds
    {
        warnings.push_with_hint(
            format!(
                "client active window ({}s) is shorter than the refresh interval ({}s); sessions will flap",
                config.session.client_active_within_seconds,
                config.session.refresh_seconds
            ),
            "Raise JELLYFIN_CLIENT_ACTIVE_WITHIN_SECONDS or lower JELLYFIN_REFRESH_SECONDS",
        );
    }

    if config.auth.token.is_some() && !config.server.ssl {
        warnings.push(
            "access token will be sent over plain http; enable ssl unless the server is on a trusted network",
        );
    }

    Ok(warnings)
}
