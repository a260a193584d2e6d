//! Configuration for tools that talk to a Jellyfin server.
//!
//! Values resolve in three layers: built-in defaults, an optional TOML file
//! and `JELLYFIN_*` environment variables (optionally fed from a `.env`
//! file). Later layers win.

pub mod loader;
pub mod models;
pub mod telemetry;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    AuthConfig, ClientConfig, ClientIdentity, ConfigMetadata, ServerConfig,
    SessionConfig,
};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
