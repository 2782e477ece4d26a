//! Process execution utilities.

use khulnasoft_types::Result;
use std::collections::HashMap;
use std::ffi::OsString;
use std::process::Stdio;

/// Values shorter than this are only redacted where they appear as `NAME=value`.
pub const MIN_REDACTED_LEN: usize = 4;

const REDACTED: &str = "***REDACTED***";

/// Snapshot of the process environment.
///
/// Entries whose name or value is not valid Unicode are skipped; they are
/// still inherited by child processes.
pub fn process_env() -> HashMap<String, String> {
    unicode_entries(std::env::vars_os())
}

fn unicode_entries(vars: impl IntoIterator<Item = (OsString, OsString)>) -> HashMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Execute a command asynchronously with environment variables layered over
/// the inherited environment.
///
/// Stdin is closed; stdout and stderr are captured in full. Returns
/// `(stdout, exit_code, stderr)`, with `-1` as the code when the child was
/// terminated by a signal. Stdout is returned byte-for-byte.
pub async fn run_async_with_env(
    command: &str,
    args: &[String],
    env_vars: &[(String, String)],
) -> Result<(Vec<u8>, i32, String)> {
    let mut cmd = tokio::process::Command::new(command);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().await?;

    Ok((
        output.stdout,
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stderr).to_string(),
    ))
}

/// Redact secret values from command output.
///
/// `secrets` are `(name, value)` pairs. Values of at least
/// [`MIN_REDACTED_LEN`] characters are redacted wherever they appear; shorter
/// ones only in `name=value` form.
pub fn redact_secrets(output: &str, secrets: &[(String, String)]) -> String {
    let mut redacted = output.to_string();
    for (name, value) in secrets {
        if value.is_empty() {
            continue;
        }
        if value.chars().count() >= MIN_REDACTED_LEN {
            redacted = redacted.replace(value.as_str(), REDACTED);
        } else {
            redacted = redacted.replace(
                &format!("{}={}", name, value),
                &format!("{}={}", name, REDACTED),
            );
        }
    }
    redacted
}
