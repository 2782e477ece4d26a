//! Operator-supplied values read from the environment.

use khulnasoft_core::util::process_env;
use khulnasoft_types::SecretKind;
use std::collections::HashMap;

/// Operator overrides for the recognized secrets.
///
/// `None` means the operator left the variable unset. An empty string in the
/// environment is treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultsInput {
    /// HEC token
    pub hec_token: Option<String>,
    /// Admin password
    pub password: Option<String>,
    /// Indexer cluster secret
    pub idxc_secret: Option<String>,
    /// Indexer cluster pass4SymmKey
    pub idxc_pass4symmkey: Option<String>,
    /// Search head cluster secret
    pub shc_secret: Option<String>,
    /// Search head cluster pass4SymmKey
    pub shc_pass4symmkey: Option<String>,
}

impl DefaultsInput {
    /// Read the recognized variables under `prefix` from a key/value map.
    pub fn from_env_map(prefix: &str, env: &HashMap<String, String>) -> Self {
        let mut input = Self::default();
        for kind in SecretKind::ALL {
            let value = env
                .get(&kind.env_var(prefix))
                .filter(|value| !value.is_empty())
                .cloned();
            *input.slot_mut(kind) = value;
        }
        input
    }

    /// Read the recognized variables under `prefix` from the process environment.
    ///
    /// Variables that are not valid Unicode are ignored.
    pub fn from_process_env(prefix: &str) -> Self {
        Self::from_env_map(prefix, &process_env())
    }

    /// The operator value for `kind`, if one was supplied.
    pub fn get(&self, kind: SecretKind) -> Option<&str> {
        let value = match kind {
            SecretKind::HecToken => self.hec_token.as_deref(),
            SecretKind::Password => self.password.as_deref(),
            SecretKind::IdxcSecret => self.idxc_secret.as_deref(),
            SecretKind::IdxcPass4SymmKey => self.idxc_pass4symmkey.as_deref(),
            SecretKind::ShcSecret => self.shc_secret.as_deref(),
            SecretKind::ShcPass4SymmKey => self.shc_pass4symmkey.as_deref(),
        };
        value.filter(|value| !value.is_empty())
    }

    /// Kinds the operator supplied.
    pub fn supplied(&self) -> Vec<SecretKind> {
        SecretKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }

    fn slot_mut(&mut self, kind: SecretKind) -> &mut Option<String> {
        match kind {
            SecretKind::HecToken => &mut self.hec_token,
            SecretKind::Password => &mut self.password,
            SecretKind::IdxcSecret => &mut self.idxc_secret,
            SecretKind::IdxcPass4SymmKey => &mut self.idxc_pass4symmkey,
            SecretKind::ShcSecret => &mut self.shc_secret,
            SecretKind::ShcPass4SymmKey => &mut self.shc_pass4symmkey,
        }
    }
}
