//! `rcgen init`: write a `.rcconfig` file.

use std::fs;

use tracing::{info, instrument};

use rcgen_core::{domain::RcConfig, error::RcgenError};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create a config file recording `root=<ROOT>`.
///
/// The line is run through the same parser the generate action uses, so
/// `init` can never write a file that `rcgen` would later reject.
#[instrument(skip_all, fields(root = %args.root))]
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::resolve_path(&global);

    let line = format!("root={}", args.root);
    let config: RcConfig = line.parse().map_err(RcgenError::from)?;

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(&config_path, format!("{}\n", config.to_line()))
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Config written");
    output.success(&format!(
        "Configuration created at {} ({})",
        config_path.display(),
        config.to_line(),
    ))?;

    Ok(())
}
