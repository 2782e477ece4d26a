//! End-to-end tests for the `createdefaults` binary.

use assert_cmd::Command;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with a clean environment: only PATH survives.
fn createdefaults() -> Command {
    let mut cmd = Command::cargo_bin("createdefaults").unwrap();
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    cmd
}

/// Installation root whose renderer is a shell script.
fn install(script: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("inventory")).unwrap();
    fs::write(home.path().join("inventory").join("environ.py"), script).unwrap();
    home
}

fn with_renderer(cmd: &mut Command, home: &TempDir) {
    cmd.env("KHULNASOFT_ANSIBLE_HOME", home.path())
        .env("KHULNASOFT_DEFAULTS_INTERPRETER", "sh");
}

fn resolve_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.args(["resolve", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_empty_environment_resolves_everything() {
    let values = resolve_json(&mut createdefaults());

    let token = values["KHULNASOFT_HEC_TOKEN"].as_str().unwrap();
    assert_eq!(token.len(), 36);
    assert_eq!(token.matches('-').count(), 4);

    let password = values["KHULNASOFT_PASSWORD"].as_str().unwrap();
    assert_eq!(STANDARD.decode(password).unwrap().len(), 24);

    assert_eq!(values["KHULNASOFT_IDXC_SECRET"], values["KHULNASOFT_IDXC_PASS4SYMMKEY"]);
    assert_eq!(values["KHULNASOFT_SHC_SECRET"], values["KHULNASOFT_SHC_PASS4SYMMKEY"]);
    assert_ne!(values["KHULNASOFT_IDXC_SECRET"], values["KHULNASOFT_SHC_SECRET"]);
}

#[cfg(unix)]
#[test]
fn test_non_unicode_environment_is_tolerated() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut cmd = createdefaults();
    cmd.env("UNRELATED_LOCALE_VALUE", OsStr::from_bytes(b"caf\xe9"))
        .env("KHULNASOFT_PASSWORD", "fixed123");

    let values = resolve_json(&mut cmd);
    assert_eq!(values["KHULNASOFT_PASSWORD"], "fixed123");
    assert_eq!(values.as_object().unwrap().len(), 6);
}

#[test]
fn test_fixed_password_passes_through() {
    let mut cmd = createdefaults();
    cmd.env("KHULNASOFT_PASSWORD", "fixed123");

    let values = resolve_json(&mut cmd);
    assert_eq!(values["KHULNASOFT_PASSWORD"], "fixed123");
    assert_eq!(values.as_object().unwrap().len(), 6);
}

#[test]
fn test_pair_precedence_is_asymmetric() {
    let mut cmd = createdefaults();
    cmd.env("KHULNASOFT_IDXC_PASS4SYMMKEY", "A")
        .env("KHULNASOFT_IDXC_SECRET", "B")
        .env("KHULNASOFT_SHC_SECRET", "C")
        .env("KHULNASOFT_SHC_PASS4SYMMKEY", "D");

    let values = resolve_json(&mut cmd);
    assert_eq!(values["KHULNASOFT_IDXC_SECRET"], "A");
    assert_eq!(values["KHULNASOFT_IDXC_PASS4SYMMKEY"], "A");
    assert_eq!(values["KHULNASOFT_SHC_SECRET"], "C");
    assert_eq!(values["KHULNASOFT_SHC_PASS4SYMMKEY"], "C");
}

#[test]
fn test_resolve_redact_hides_values() {
    createdefaults()
        .env("KHULNASOFT_PASSWORD", "topsecretpw")
        .args(["resolve", "--redact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KHULNASOFT_PASSWORD=***REDACTED***"))
        .stdout(predicate::str::contains("topsecretpw").not());
}

#[test]
fn test_custom_prefix() {
    let mut cmd = createdefaults();
    cmd.env("KHULNASOFT_DEFAULTS_ENV_PREFIX", "SPLUNK_").env("SPLUNK_PASSWORD", "pfx");

    let values = resolve_json(&mut cmd);
    assert_eq!(values["SPLUNK_PASSWORD"], "pfx");
    assert!(values.get("KHULNASOFT_PASSWORD").is_none());
}

#[test]
fn test_missing_home_is_fatal_and_silent() {
    createdefaults()
        .arg("create-defaults")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("KHULNASOFT_ANSIBLE_HOME"));
}

#[test]
fn test_no_subcommand_runs_create_defaults() {
    createdefaults()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Bootstrap error"));
}

#[test]
fn test_missing_entry_point_is_fatal() {
    let home = TempDir::new().unwrap();
    let mut cmd = createdefaults();
    with_renderer(&mut cmd, &home);

    cmd.arg("create-defaults")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("environ.py"));
}

#[test]
fn test_create_defaults_emits_rendered_document() {
    let home = install(
        "[ \"$1\" = --write-to-stdout ] || exit 9\n\
         echo 'khulnasoft:'\n\
         echo \"  password: $KHULNASOFT_PASSWORD\"\n\
         echo \"  idxc_secret: $KHULNASOFT_IDXC_SECRET\"\n\
         echo \"  idxc_key: $KHULNASOFT_IDXC_PASS4SYMMKEY\"\n\
         echo \"  hec_token: $KHULNASOFT_HEC_TOKEN\"\n",
    );
    let mut cmd = createdefaults();
    with_renderer(&mut cmd, &home);
    cmd.env("KHULNASOFT_PASSWORD", "fixed123");

    let output = cmd.arg("create-defaults").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("khulnasoft:\n"));
    assert!(stdout.contains("  password: fixed123\n"));

    let field = |name: &str| {
        stdout
            .lines()
            .find_map(|l| l.trim().strip_prefix(name).map(str::to_string))
            .unwrap()
    };
    assert_eq!(field("idxc_secret: "), field("idxc_key: "));
    assert!(!field("idxc_secret: ").is_empty());
    assert_eq!(field("hec_token: ").len(), 36);
}

#[test]
fn test_renderer_args_are_forwarded() {
    let home = install("printf '%s|' \"$@\"\n");
    let mut cmd = createdefaults();
    with_renderer(&mut cmd, &home);

    cmd.args(["create-defaults", "--", "--list"])
        .assert()
        .success()
        .stdout("--list|--write-to-stdout|");
}

#[test]
fn test_renderer_failure_emits_nothing() {
    let home = install("echo 'half: written'\necho boom >&2\nexit 5\n");
    let mut cmd = createdefaults();
    with_renderer(&mut cmd, &home);

    cmd.arg("create-defaults")
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("boom"));
}

#[test]
fn test_renderer_diagnostics_survive_silenced_logging() {
    let home = install("echo 'template failed: no such host' >&2\nexit 5\n");
    let mut cmd = createdefaults();
    with_renderer(&mut cmd, &home);
    cmd.env("KHULNASOFT_DEFAULTS_LOG_LEVEL", "off");

    cmd.arg("create-defaults")
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("template failed: no such host"));
}

#[test]
fn test_failing_renderer_stderr_is_redacted() {
    let home = install("echo \"bad password $KHULNASOFT_PASSWORD\" >&2\nexit 2\n");
    let mut cmd = createdefaults();
    with_renderer(&mut cmd, &home);
    cmd.env("KHULNASOFT_PASSWORD", "topsecretpw");

    cmd.arg("create-defaults")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad password ***REDACTED***"))
        .stderr(predicate::str::contains("topsecretpw").not());
}

#[test]
fn test_rendered_document_bytes_are_untouched() {
    let home = install("printf 'motd: caf\\351\\n'\n");
    let mut cmd = createdefaults();
    with_renderer(&mut cmd, &home);

    let output = cmd.arg("create-defaults").output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"motd: caf\xe9\n");
}

#[test]
fn test_check_reports_placeholder_password() {
    createdefaults()
        .env("KHULNASOFT_PASSWORD", "helloworld")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder"));
}

#[test]
fn test_version() {
    createdefaults()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_verbose_version_shows_configured_defaults() {
    createdefaults()
        .env("KHULNASOFT_DEFAULTS_ENV_PREFIX", "SPLUNK_")
        .args(["version", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variable prefix: SPLUNK_"))
        .stdout(predicate::str::contains("$KHULNASOFT_ANSIBLE_HOME"))
        .stdout(predicate::str::contains("--write-to-stdout"));
}
