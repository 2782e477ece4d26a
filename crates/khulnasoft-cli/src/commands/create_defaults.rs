//! Resolve defaults and hand them to the renderer.

use anyhow::Result;
use khulnasoft_defaults::{provision, DefaultsInput, ProcessRenderer, SystemEntropy};
use khulnasoft_types::config::DefaultsConfig;
use khulnasoft_types::KhulnasoftError;
use std::collections::HashMap;
use std::io::Write;

pub async fn execute(
    config: &DefaultsConfig,
    env: &HashMap<String, String>,
    renderer_args: &[String],
) -> Result<()> {
    // Bootstrap before resolving so a broken install never emits anything.
    let renderer = ProcessRenderer::locate(config, env, renderer_args)?;

    let input = DefaultsInput::from_env_map(&config.env_prefix, env);
    let provisioned = match provision(&config.env_prefix, input, &mut SystemEntropy, &renderer).await {
        Ok(provisioned) => provisioned,
        Err(e) => {
            if let KhulnasoftError::RendererExit { diagnostics, .. } = &e {
                eprint!("{}", diagnostics);
            }
            return Err(e.into());
        }
    };

    if !provisioned.document.diagnostics.is_empty() {
        eprint!("{}", provisioned.document.diagnostics);
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&provisioned.document.body)?;
    stdout.flush()?;

    Ok(())
}
