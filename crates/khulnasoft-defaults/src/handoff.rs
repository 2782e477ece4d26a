//! Handing resolved defaults to the external renderer.
//!
//! The renderer is the provisioning tool's inventory script. It reads the
//! recognized variables from its environment and, when passed the stdout
//! flag, writes the full configuration document to stdout.

use crate::input::DefaultsInput;
use crate::resolver::{resolve, ResolvedDefaults};
use crate::validator::validate;
use async_trait::async_trait;
use khulnasoft_core::util::process::{redact_secrets, run_async_with_env};
use khulnasoft_types::config::DefaultsConfig;
use khulnasoft_types::{
    bail, ConfigRenderer, EntropySource, KhulnasoftError, RenderedDocument, Result,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Renderer run as a child process: `<interpreter> <entry point> <args>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRenderer {
    interpreter: String,
    entry_point: PathBuf,
    args: Vec<String>,
}

impl ProcessRenderer {
    /// Locate the renderer under the installation root named by
    /// `config.home_var` in `env`.
    ///
    /// `extra_args` are forwarded ahead of the stdout flag. Fails with
    /// [`KhulnasoftError::Bootstrap`] when the root is unset or the entry
    /// point does not exist.
    pub fn locate(
        config: &DefaultsConfig,
        env: &HashMap<String, String>,
        extra_args: &[String],
    ) -> Result<Self> {
        let home = match env.get(&config.home_var).filter(|home| !home.is_empty()) {
            Some(home) => home,
            None => bail!(
                Bootstrap,
                "{} is not set; cannot locate the provisioning renderer",
                config.home_var
            ),
        };

        let entry_point = Path::new(home).join(&config.renderer.entry_point);
        if !entry_point.is_file() {
            bail!(
                Bootstrap,
                "Renderer entry point {} does not exist (from {}={})",
                entry_point.display(),
                config.home_var,
                home
            );
        }

        let mut args = extra_args.to_vec();
        let flag = &config.renderer.stdout_flag;
        if !flag.is_empty() && !args.contains(flag) {
            args.push(flag.clone());
        }

        Ok(Self {
            interpreter: config.renderer.interpreter.clone(),
            entry_point,
            args,
        })
    }

    /// Absolute path of the entry point.
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Arguments passed after the entry point.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl ConfigRenderer for ProcessRenderer {
    async fn render(&self, env: &[(String, String)]) -> Result<RenderedDocument> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.entry_point.display().to_string());
        args.extend(self.args.iter().cloned());

        let (stdout, code, stderr) = run_async_with_env(&self.interpreter, &args, env)
            .await
            .map_err(|e| {
                KhulnasoftError::Renderer(format!("Failed to start {}: {}", self.describe(), e))
            })?;

        let diagnostics = redact_secrets(&stderr, env);

        if code != 0 {
            tracing::debug!(code, renderer = %self.describe(), "Renderer failed");
            return Err(KhulnasoftError::RendererExit { code, diagnostics });
        }

        Ok(RenderedDocument { body: stdout, diagnostics })
    }

    fn describe(&self) -> String {
        format!("{} {}", self.interpreter, self.entry_point.display())
    }
}

/// Result of a full provisioning run.
#[derive(Debug, Clone)]
pub struct Provisioned {
    /// Values handed to the renderer
    pub resolved: ResolvedDefaults,
    /// What the renderer produced
    pub document: RenderedDocument,
}

/// Resolve `input`, then run `renderer` with the resolved values exported
/// under `prefix`.
///
/// Validation warnings are logged and never block the handoff.
pub async fn provision<R>(
    prefix: &str,
    input: DefaultsInput,
    entropy: &mut impl EntropySource,
    renderer: &R,
) -> Result<Provisioned>
where
    R: ConfigRenderer + ?Sized,
{
    let supplied = input.supplied();
    tracing::debug!(supplied = ?supplied, "Operator-supplied secrets");

    let resolved = resolve(input, entropy)?;

    let summary = validate(&resolved);
    for (kind, warnings) in &summary.warnings {
        for warning in warnings {
            tracing::warn!(secret = %kind, "{}", warning);
        }
    }
    if !summary.is_all_valid() {
        khulnasoft_types::bug!("resolved defaults failed validation: {:?}", summary.errors);
    }

    tracing::info!(renderer = %renderer.describe(), "Handing resolved defaults to renderer");
    let document = renderer.render(&resolved.to_env(prefix)).await?;

    Ok(Provisioned { resolved, document })
}
