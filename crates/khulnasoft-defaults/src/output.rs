//! Printing resolved values.

use crate::resolver::ResolvedDefaults;
use indexmap::IndexMap;
use khulnasoft_types::{OutputFormat, Result};

/// Placeholder printed instead of a value when redacting.
pub const REDACTED: &str = "***REDACTED***";

/// Render resolved values as `format`.
///
/// With `redact`, every value is replaced by [`REDACTED`] so the output can
/// be logged or attached to bug reports.
pub fn render(
    resolved: &ResolvedDefaults,
    prefix: &str,
    format: OutputFormat,
    redact: bool,
) -> Result<String> {
    let values: IndexMap<String, String> = resolved
        .to_map(prefix)
        .into_iter()
        .map(|(name, value)| (name, if redact { REDACTED.to_string() } else { value }))
        .collect();

    let rendered = match format {
        OutputFormat::Env => values
            .iter()
            .map(|(name, value)| format!("{}={}\n", name, value))
            .collect::<String>(),
        OutputFormat::Export => values
            .iter()
            .map(|(name, value)| format!("export {}={}\n", name, shell_quote(value)))
            .collect::<String>(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&values)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(&values)?,
    };

    Ok(rendered)
}

/// Single-quote `value` for POSIX shells.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SystemEntropy;
    use crate::input::DefaultsInput;
    use crate::resolver::resolve;

    fn resolved() -> ResolvedDefaults {
        let input = DefaultsInput {
            hec_token: Some("00000000-0000-4000-8000-000000000000".to_string()),
            password: Some("it's".to_string()),
            idxc_secret: Some("idx".to_string()),
            shc_secret: Some("shc".to_string()),
            ..Default::default()
        };
        resolve(input, &mut SystemEntropy).unwrap()
    }

    #[test]
    fn test_env_format() {
        let out = render(&resolved(), "KHULNASOFT_", OutputFormat::Env, false).unwrap();
        assert!(out.starts_with("KHULNASOFT_HEC_TOKEN=00000000-0000-4000-8000-000000000000\n"));
        assert!(out.contains("KHULNASOFT_IDXC_PASS4SYMMKEY=idx\n"));
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_export_format_quotes() {
        let out = render(&resolved(), "KHULNASOFT_", OutputFormat::Export, false).unwrap();
        assert!(out.contains(r"export KHULNASOFT_PASSWORD='it'\''s'"));
    }

    #[test]
    fn test_json_format_parses() {
        let out = render(&resolved(), "KHULNASOFT_", OutputFormat::Json, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["KHULNASOFT_SHC_PASS4SYMMKEY"], "shc");
    }

    #[test]
    fn test_yaml_format_parses() {
        let out = render(&resolved(), "X_", OutputFormat::Yaml, false).unwrap();
        let parsed: IndexMap<String, String> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed["X_IDXC_SECRET"], "idx");
        assert_eq!(parsed.len(), 6);
    }

    #[test]
    fn test_redaction_hides_every_value() {
        let resolved = resolved();
        let out = render(&resolved, "KHULNASOFT_", OutputFormat::Env, true).unwrap();
        for value in resolved.secret_values() {
            assert!(!out.contains(value), "leaked {}", value);
        }
        assert_eq!(out.matches(REDACTED).count(), 6);
    }
}
