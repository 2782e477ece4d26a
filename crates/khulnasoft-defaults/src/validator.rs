//! Advisory checks over resolved values.
//!
//! Operator input is trusted: nothing here rejects a value the operator
//! chose. Weak or odd-looking values are reported as warnings only.

use crate::resolver::ResolvedDefaults;
use khulnasoft_types::{SecretKind, ValueSource};
use uuid::Uuid;

/// Passwords shipped in documentation and sample compose files.
pub const PLACEHOLDER_PASSWORDS: &[&str] = &["helloworld", "changeme", "changeme123", "password"];

/// Operator-supplied cluster secrets shorter than this are flagged.
pub const MIN_CLUSTER_SECRET_LEN: usize = 8;

/// Summary of validation results.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Secrets that passed every check
    pub ok: Vec<SecretKind>,
    /// Secrets with warnings (kind, warnings)
    pub warnings: Vec<(SecretKind, Vec<String>)>,
    /// Secrets with errors (kind, errors)
    pub errors: Vec<(SecretKind, Vec<String>)>,
}

impl ValidationSummary {
    /// True when nothing would stop the renderer from running.
    pub fn is_all_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get total count of secrets.
    pub fn total(&self) -> usize {
        self.ok.len() + self.warnings.len() + self.errors.len()
    }
}

/// Check every resolved value.
pub fn validate(resolved: &ResolvedDefaults) -> ValidationSummary {
    let mut summary = ValidationSummary::default();

    for (kind, resolved_value) in resolved.entries() {
        let value = resolved_value.value.as_str();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if value.is_empty() {
            errors.push("value is empty".to_string());
        }

        if let Some(partner) = kind.partner() {
            if resolved.get(partner).value != value {
                errors.push(format!("differs from {}", partner));
            }
        }

        if resolved_value.source == ValueSource::Operator {
            match kind {
                SecretKind::Password => {
                    if PLACEHOLDER_PASSWORDS.iter().any(|p| p.eq_ignore_ascii_case(value)) {
                        warnings.push("password is a well-known placeholder".to_string());
                    }
                }
                SecretKind::HecToken => {
                    if Uuid::parse_str(value).is_err() {
                        warnings.push("HEC token is not a UUID".to_string());
                    }
                }
                _ => {
                    if value.len() < MIN_CLUSTER_SECRET_LEN {
                        warnings.push(format!(
                            "shorter than {} characters",
                            MIN_CLUSTER_SECRET_LEN
                        ));
                    }
                }
            }
        }

        if !errors.is_empty() {
            summary.errors.push((kind, errors));
        } else if !warnings.is_empty() {
            summary.warnings.push((kind, warnings));
        } else {
            summary.ok.push(kind);
        }
    }

    summary
}
