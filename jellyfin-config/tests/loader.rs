use std::fs;
use std::sync::Mutex;

use jellyfin_config::{ConfigGuardRailError, ConfigLoadError, ConfigLoader};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const FILE_CONFIG: &str = r#"
[server]
host = "file.lan"
port = 8920
ssl = true
path = "jellyfin"

[auth]
token = "file-token"
user_id = "2a4c6e8f-0b1d-4f3a-8c5e-7a9b1c3d5e7f"

[client]
device_name = "Den Shield"

[session]
refresh_seconds = 10
client_active_within_seconds = 120
"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn file_values_apply_over_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "jellyfin.toml", FILE_CONFIG);

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .with_vars(Vec::<(String, String)>::new())
        .load()
        .expect("load");

    let config = load.config;
    assert_eq!(config.server.host, "file.lan");
    assert_eq!(config.server.port, 8920);
    assert_eq!(config.server.path, "/jellyfin/");
    assert_eq!(config.client.device_id, "den-shield");
    assert_eq!(config.session.refresh_seconds, 10);
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(!config.metadata.env_file_loaded);
    assert!(load.warnings.is_empty(), "{:?}", load.warnings);
    assert_eq!(
        config.websocket_url().expect("socket").as_str(),
        "wss://file.lan:8920/jellyfin/socket?api_key=file-token&deviceId=den-shield"
    );
}

#[test]
fn env_beats_env_file_beats_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "jellyfin.toml", FILE_CONFIG);
    let env_file = write(
        &dir,
        ".env",
        "JELLYFIN_HOST=dotenv.lan\nJELLYFIN_PORT=9000\nJELLYFIN_SSL=off\n",
    );

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_file(&env_file)
        .with_vars([("JELLYFIN_PORT", "9443")])
        .load()
        .expect("load");

    let config = load.config;
    assert_eq!(config.server.host, "dotenv.lan");
    assert_eq!(config.server.port, 9443);
    assert!(!config.server.ssl);
    assert_eq!(config.auth.token.as_deref(), Some("file-token"));
    assert!(config.metadata.env_file_loaded);
    assert_eq!(
        config.base_url().expect("base").as_str(),
        "http://dotenv.lan:9443/jellyfin/"
    );
    // token over plain http
    assert_eq!(load.warnings.items.len(), 1);
}

#[test]
fn config_path_can_come_from_the_environment() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "from-env.toml", FILE_CONFIG);

    let load = ConfigLoader::new()
        .with_vars([("JELLYFIN_CONFIG", path.to_string_lossy().into_owned())])
        .load()
        .expect("load");
    assert_eq!(load.config.server.host, "file.lan");
}

#[test]
fn missing_host_is_a_guard_rail_failure() {
    let err = ConfigLoader::new()
        .with_vars(Vec::<(String, String)>::new())
        .load()
        .expect_err("no host configured");
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::EmptyHost)
    ));
}

#[test]
fn unreadable_and_malformed_files_are_reported() {
    let dir = TempDir::new().expect("tempdir");

    let missing = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_vars([("JELLYFIN_HOST", "jf.lan")])
        .load()
        .expect_err("missing file");
    assert!(matches!(missing, ConfigLoadError::ConfigFileIo { .. }));

    let broken = write(&dir, "broken.toml", "[server\nhost = ");
    let malformed = ConfigLoader::new()
        .with_config_path(&broken)
        .with_vars([("JELLYFIN_HOST", "jf.lan")])
        .load()
        .expect_err("malformed file");
    assert!(matches!(malformed, ConfigLoadError::ConfigFileParse { .. }));
}

#[test]
fn defaults_produce_warnings_not_errors() {
    let load = ConfigLoader::new()
        .with_vars([
            ("JELLYFIN_HOST", "jf.lan"),
            ("JELLYFIN_REFRESH_SECONDS", "600"),
        ])
        .load()
        .expect("load");
    assert_eq!(load.config.server.port, 8096);
    // missing token and an active window shorter than the refresh
    assert_eq!(load.warnings.items.len(), 2);
}

#[test]
fn process_environment_is_read_when_no_vars_are_given() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
    unsafe {
        std::env::set_var("JELLYFIN_HOST", "process.lan");
        std::env::set_var("JELLYFIN_TOKEN", "process-token");
    }

    let result = ConfigLoader::new().load();

    unsafe {
        std::env::remove_var("JELLYFIN_HOST");
        std::env::remove_var("JELLYFIN_TOKEN");
    }

    let config = result.expect("load").config;
    assert_eq!(config.server.host, "process.lan");
    assert_eq!(config.auth.token.as_deref(), Some("process-token"));
}
