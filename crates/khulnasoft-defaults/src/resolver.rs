//! Default secret resolution.
//!
//! Resolution order:
//! 1. HEC token: operator value, else a random UUID
//! 2. Password: operator value, else a generated secret
//! 3. Indexer cluster pair: `IDXC_PASS4SYMMKEY`, else `IDXC_SECRET`, else generated
//! 4. Search head cluster pair: `SHC_SECRET`, else `SHC_PASS4SYMMKEY`, else generated
//!
//! The two cluster pairs deliberately prefer opposite halves. Deployments in
//! the field rely on each order, so neither may be "aligned" with the other.

use crate::entropy::{generate_secret, generate_uuid};
use crate::input::DefaultsInput;
use indexmap::IndexMap;
use khulnasoft_types::{EntropySource, Result, SecretKind, ValueSource};
use serde::Serialize;

/// One resolved value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    /// The value handed to the renderer
    pub value: String,
    /// Origin of the value
    pub source: ValueSource,
}

impl ResolvedValue {
    fn operator(value: &str) -> Self {
        Self { value: value.to_string(), source: ValueSource::Operator }
    }

    fn generated(value: String) -> Self {
        Self { value, source: ValueSource::Generated }
    }
}

/// Every recognized secret, fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDefaults {
    /// HEC token
    pub hec_token: ResolvedValue,
    /// Admin password
    pub password: ResolvedValue,
    /// Indexer cluster secret
    pub idxc_secret: ResolvedValue,
    /// Indexer cluster pass4SymmKey
    pub idxc_pass4symmkey: ResolvedValue,
    /// Search head cluster secret
    pub shc_secret: ResolvedValue,
    /// Search head cluster pass4SymmKey
    pub shc_pass4symmkey: ResolvedValue,
}

impl ResolvedDefaults {
    /// Resolved value for `kind`.
    pub fn get(&self, kind: SecretKind) -> &ResolvedValue {
        match kind {
            SecretKind::HecToken => &self.hec_token,
            SecretKind::Password => &self.password,
            SecretKind::IdxcSecret => &self.idxc_secret,
            SecretKind::IdxcPass4SymmKey => &self.idxc_pass4symmkey,
            SecretKind::ShcSecret => &self.shc_secret,
            SecretKind::ShcPass4SymmKey => &self.shc_pass4symmkey,
        }
    }

    /// All entries in resolution order.
    pub fn entries(&self) -> impl Iterator<Item = (SecretKind, &ResolvedValue)> + '_ {
        SecretKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Variable assignments for the renderer, in resolution order.
    pub fn to_env(&self, prefix: &str) -> Vec<(String, String)> {
        self.entries()
            .map(|(kind, resolved)| (kind.env_var(prefix), resolved.value.clone()))
            .collect()
    }

    /// Variable name to value map, in resolution order.
    pub fn to_map(&self, prefix: &str) -> IndexMap<String, String> {
        self.to_env(prefix).into_iter().collect()
    }

    /// Every distinct value, for redacting child process output.
    pub fn secret_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.entries().map(|(_, r)| r.value.as_str()).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}

/// A cluster pair and which half wins when the operator sets both.
#[derive(Debug, Clone, Copy)]
struct ClusterPair {
    preferred: SecretKind,
    fallback: SecretKind,
}

const INDEXER_CLUSTER: ClusterPair = ClusterPair {
    preferred: SecretKind::IdxcPass4SymmKey,
    fallback: SecretKind::IdxcSecret,
};

const SEARCH_HEAD_CLUSTER: ClusterPair = ClusterPair {
    preferred: SecretKind::ShcSecret,
    fallback: SecretKind::ShcPass4SymmKey,
};

impl ClusterPair {
    /// Returns the resolved (preferred, fallback) halves.
    fn reconcile(
        &self,
        input: &DefaultsInput,
        entropy: &mut impl EntropySource,
    ) -> Result<(ResolvedValue, ResolvedValue)> {
        let canonical = match input.get(self.preferred).or_else(|| input.get(self.fallback)) {
            Some(value) => value.to_string(),
            None => {
                let secret = generate_secret(entropy)?;
                let generated = ResolvedValue::generated(secret);
                return Ok((generated.clone(), generated));
            }
        };

        let half = |kind: SecretKind| ResolvedValue {
            value: canonical.clone(),
            source: if input.get(kind) == Some(canonical.as_str()) {
                ValueSource::Operator
            } else {
                ValueSource::Paired
            },
        };

        Ok((half(self.preferred), half(self.fallback)))
    }
}

/// Resolve every recognized secret.
///
/// Operator values are accepted as-is; only unset values draw from
/// `entropy`. The only failure is the entropy source itself failing.
pub fn resolve(input: DefaultsInput, entropy: &mut impl EntropySource) -> Result<ResolvedDefaults> {
    let hec_token = match input.get(SecretKind::HecToken) {
        Some(token) => ResolvedValue::operator(token),
        None => ResolvedValue::generated(generate_uuid(entropy)?.hyphenated().to_string()),
    };

    let password = match input.get(SecretKind::Password) {
        Some(password) => ResolvedValue::operator(password),
        None => ResolvedValue::generated(generate_secret(entropy)?),
    };

    let (idxc_pass4symmkey, idxc_secret) = INDEXER_CLUSTER.reconcile(&input, entropy)?;
    let (shc_secret, shc_pass4symmkey) = SEARCH_HEAD_CLUSTER.reconcile(&input, entropy)?;

    let resolved = ResolvedDefaults {
        hec_token,
        password,
        idxc_secret,
        idxc_pass4symmkey,
        shc_secret,
        shc_pass4symmkey,
    };

    for (kind, value) in resolved.entries() {
        tracing::debug!(secret = %kind, source = %value.source, "Resolved default");
    }

    Ok(resolved)
}
