pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;
use uuid::Uuid;

use sources::{EnvConfig, FileConfig};

pub const DEFAULT_PORT: u16 = 8096;
pub const DEFAULT_REFRESH_SECONDS: u64 = 30;
pub const DEFAULT_CLIENT_ACTIVE_WITHIN_SECONDS: u64 = 300;
pub const DEFAULT_CLIENT_NAME: &str = "jellyfinctl";

/// Fully resolved client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub client: ClientIdentity,
    pub session: SessionConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub ssl: bool,
    /// Base path the server is mounted under; always starts and ends with `/`.
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub token: Option<String>,
    pub user_id: Option<Uuid>,
}

/// How this client identifies itself to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub name: String,
    pub version: String,
    pub device_name: String,
    pub device_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub refresh_seconds: u64,
    /// Sessions idle for longer than this are treated as gone.
    pub client_active_within_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            ssl: false,
            path: "/".to_string(),
        }
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLIENT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            device_name: DEFAULT_CLIENT_NAME.to_string(),
            device_id: DEFAULT_CLIENT_NAME.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: DEFAULT_REFRESH_SECONDS,
            client_active_within_seconds: DEFAULT_CLIENT_ACTIVE_WITHIN_SECONDS,
        }
    }
}

impl SessionConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_seconds)
    }

    pub fn client_active_window(&self) -> Duration {
        Duration::from_secs(self.client_active_within_seconds)
    }
}

impl ClientConfig {
    /// Layers `file` and then `env` over the defaults.
    pub fn resolve(file: FileConfig, env: EnvConfig) -> Self {
        let defaults = Self::default();

        let server = ServerConfig {
            host: env
                .host
                .or(file.server.host)
                .map(|host| host.trim().to_string())
                .unwrap_or(defaults.server.host),
            port: env.port.or(file.server.port).unwrap_or(defaults.server.port),
            ssl: env.ssl.or(file.server.ssl).unwrap_or(defaults.server.ssl),
            path: normalize_base_path(
                env.path.or(file.server.path).as_deref().unwrap_or("/"),
            ),
        };

        let auth = AuthConfig {
            token: env
                .token
                .or(file.auth.token)
                .filter(|token| !token.trim().is_empty()),
            user_id: env.user_id.or(file.auth.user_id),
        };

        let device_name = env
            .device_name
            .or(file.client.device_name)
            .unwrap_or(defaults.client.device_name);
        let client = ClientIdentity {
            name: env
                .client_name
                .or(file.client.name)
                .unwrap_or(defaults.client.name),
            version: file.client.version.unwrap_or(defaults.client.version),
            device_id: env
                .device_id
                .or(file.client.device_id)
                .unwrap_or_else(|| device_id_from_name(&device_name)),
            device_name,
        };

        let session = SessionConfig {
            refresh_seconds: env
                .refresh_seconds
                .or(file.session.refresh_seconds)
                .unwrap_or(defaults.session.refresh_seconds),
            client_active_within_seconds: env
                .client_active_within_seconds
                .or(file.session.client_active_within_seconds)
                .unwrap_or(defaults.session.client_active_within_seconds),
        };

        Self {
            server,
            auth,
            client,
            session,
            metadata: defaults.metadata,
        }
    }

    /// `http(s)://host:port/path/`.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        let scheme = if self.server.ssl { "https" } else { "http" };
        self.endpoint(scheme)
    }

    /// `ws(s)://host:port/path/socket?api_key=..&deviceId=..`.
    pub fn websocket_url(&self) -> Result<Url, url::ParseError> {
        let scheme = if self.server.ssl { "wss" } else { "ws" };
        let mut url = self.endpoint(scheme)?.join("socket")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(token) = self.auth.token.as_deref() {
                query.append_pair("api_key", token);
            }
            query.append_pair("deviceId", &self.client.device_id);
        }
        Ok(url)
    }

    /// Value for the `Authorization` header Jellyfin expects.
    pub fn authorization_header(&self) -> String {
        let mut header = format!(
            "MediaBrowser Client=\"{}\", Device=\"{}\", DeviceId=\"{}\", Version=\"{}\"",
            quote_safe(&self.client.name),
            quote_safe(&self.client.device_name),
            quote_safe(&self.client.device_id),
            quote_safe(&self.client.version),
        );
        if let Some(token) = self.auth.token.as_deref() {
            header.push_str(&format!(", Token=\"{}\"", quote_safe(token)));
        }
        header
    }

    /// [`ClientConfig::authorization_header`] with the token masked.
    pub fn redacted_authorization_header(&self) -> String {
        let mut redacted = self.clone();
        if redacted.auth.token.is_some() {
            redacted.auth.token = Some("***".to_string());
        }
        redacted.authorization_header()
    }

    fn endpoint(&self, scheme: &str) -> Result<Url, url::ParseError> {
        let host = &self.server.host;
        let host = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]")
        } else {
            host.clone()
        };
        Url::parse(&format!(
            "{scheme}://{host}:{}{}",
            self.server.port, self.server.path
        ))
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

fn device_id_from_name(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let id = id.trim_matches('-');
    if id.is_empty() {
        DEFAULT_CLIENT_NAME.to_string()
    } else {
        id.to_string()
    }
}

// Header values are quoted; drop anything that would end the quote early.
fn quote_safe(value: &str) -> String {
    value.chars().filter(|c| *c != '"' && *c != '\\').collect()
}
