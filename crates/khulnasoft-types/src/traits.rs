//! Core trait definitions for the provisioner's collaborators.

use async_trait::async_trait;
use crate::errors::Result;

/// Source of random bytes for generated secrets.
///
/// Production code must use an operating-system CSPRNG. Tests substitute a
/// fixed-output implementation through this trait instead of touching the
/// production source.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}

/// Output of a completed renderer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    /// The configuration document the renderer wrote to its stdout, unmodified
    pub body: Vec<u8>,
    /// Anything the renderer wrote to stderr
    pub diagnostics: String,
}

/// Trait for the external configuration renderer.
///
/// The renderer reads the resolved values from its environment and emits a
/// configuration document. Implementations must return an error rather than
/// a partial document when the render fails.
#[async_trait]
pub trait ConfigRenderer: Send + Sync {
    /// Render with `env` layered over the inherited environment.
    async fn render(&self, env: &[(String, String)]) -> Result<RenderedDocument>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}
