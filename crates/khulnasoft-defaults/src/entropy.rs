//! Secure random generation for default secrets.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use khulnasoft_types::{EntropySource, KhulnasoftError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

/// Raw bytes drawn for every generated password or cluster secret.
pub const SECRET_BYTES: usize = 24;

/// Operating-system CSPRNG.
///
/// This is the only entropy source production code paths use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| KhulnasoftError::Entropy(format!("Secure random source failed: {}", e)))
    }
}

/// Generate a secret: [`SECRET_BYTES`] random bytes, standard base64.
pub fn generate_secret(entropy: &mut impl EntropySource) -> Result<String> {
    let mut bytes = [0u8; SECRET_BYTES];
    entropy.fill_bytes(&mut bytes)?;
    Ok(STANDARD.encode(bytes))
}

/// Generate a version 4 UUID from 16 random bytes.
pub fn generate_uuid(entropy: &mut impl EntropySource) -> Result<Uuid> {
    let mut bytes = [0u8; 16];
    entropy.fill_bytes(&mut bytes)?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}
