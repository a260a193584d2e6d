use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn help_lists_every_command() {
    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    let out = cmd
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    for command in ["query", "check", "keep-alive", "config"] {
        assert!(text.contains(command), "help missing '{command}'");
    }
}

#[test]
fn query_help_mentions_schema_and_prefix() {
    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.args(["query", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--schema"))
        .stdout(predicate::str::contains("--prefix"));
}

#[test]
fn query_prints_form_style_pairs() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("item.json");
    fs::write(
        &path,
        r#"{"Name":"a","Id":"3f1c5e2a-8b7d-4c6e-9a0b-1d2e3f4a5b6c","People":[{"Name":"x"}]}"#,
    )
    .expect("write payload");

    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.args(["query", "--schema", "base-item"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Name=a&Id=3f1c5e2a-8b7d-4c6e-9a0b-1d2e3f4a5b6c&People[0][Name]=x",
        ));
}

#[test]
fn query_reads_stdin_with_a_prefix() {
    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.args(["query", "--schema", "general-command", "--prefix", "cmd", "-"])
        .write_stdin(r#"{"Name":"DisplayMessage","Arguments":{"Header":"Hi"}}"#)
        .assert()
        .success()
        .stdout("cmd[Name]=DisplayMessage&cmd[Arguments][Header]=Hi\n");
}

#[test]
fn check_reports_dropped_members() {
    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.args(["check", "--schema", "session", "-"])
        .write_stdin(r#"{"Id":"abc","NotAField":true}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("session: ok, 2 members, 1 dropped"))
        .stdout(predicate::str::contains("dropped: NotAField"));
}

#[test]
fn check_fails_on_bad_enum_values() {
    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.args(["check", "--schema", "base-item", "-"])
        .write_stdin(r#"{"Type":"Hologram"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not decode"));
}

#[test]
fn keep_alive_uses_the_given_id() {
    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.args([
        "keep-alive",
        "--message-id",
        "00000000-0000-0000-0000-00000000002a",
    ])
    .assert()
    .success()
    .stdout(
        "{\"MessageId\":\"00000000-0000-0000-0000-00000000002a\",\"MessageType\":\"KeepAlive\"}\n",
    );
}

#[test]
fn inbound_keep_alive_is_bare() {
    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.args(["keep-alive", "--inbound"])
        .assert()
        .success()
        .stdout("{\"MessageType\":\"KeepAlive\"}\n");
}

#[test]
fn config_redacts_the_token() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("jellyfin.toml");
    fs::write(
        &path,
        "[server]\nhost = \"jf.lan\"\nssl = true\n\n[auth]\ntoken = \"sekrit\"\n",
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("jellyfinctl");
    cmd.arg("config")
        .arg("--config")
        .arg(&path)
        .env_remove("JELLYFIN_HOST")
        .env_remove("JELLYFIN_TOKEN")
        .env_remove("JELLYFIN_CONFIG")
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url: https://jf.lan:8096/"))
        .stdout(predicate::str::contains("api_key=***"))
        .stdout(predicate::str::contains("Token=\"***\""))
        .stdout(predicate::str::contains("sekrit").not());
}
