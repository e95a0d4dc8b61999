//! Application configuration.
//!
//! [`AppConfig`] is loaded once, only for the generate action, and passed
//! down by value. The core crate never reads files; it receives the parsed
//! [`RcConfig`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>`
//! 2. `RCGEN_CONFIG` (wired through clap's `env`, so it lands in the same flag)
//! 3. `.rcconfig` in the working directory

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use rcgen_core::domain::RcConfig;
use tracing::debug;

use crate::{
    cli::GlobalArgs,
    error::{CliError, CliResult},
};

/// Default config file, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = ".rcconfig";

/// Upper bound on bytes read from the config file. Anything past it is ignored.
pub const MAX_CONFIG_BYTES: u64 = 4096;

/// Parsed configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub path: PathBuf,
    pub rc: RcConfig,
}

impl AppConfig {
    /// Resolve the config path from the global flags.
    pub fn resolve_path(args: &GlobalArgs) -> PathBuf {
        args.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Read and parse the config file at `path`.
    ///
    /// A missing, unreadable or empty file is [`CliError::ConfigMissing`];
    /// malformed content surfaces as the core `InvalidFormat` error.
    pub fn load(path: &Path) -> CliResult<Self> {
        let bytes = read_capped(path)?;
        if bytes.is_empty() {
            return Err(CliError::ConfigMissing {
                path: path.to_path_buf(),
                reason: "file is empty".into(),
                source: None,
            });
        }

        let rc = RcConfig::from_bytes(&bytes).map_err(rcgen_core::error::RcgenError::from)?;
        debug!(path = %path.display(), root = rc.root(), "config loaded");

        Ok(Self {
            path: path.to_path_buf(),
            rc,
        })
    }
}

fn read_capped(path: &Path) -> CliResult<Vec<u8>> {
    let missing = |e: std::io::Error| CliError::ConfigMissing {
        path: path.to_path_buf(),
        reason: e.to_string(),
        source: Some(e),
    };

    let file = File::open(path).map_err(missing)?;
    let mut bytes = Vec::new();
    file.take(MAX_CONFIG_BYTES)
        .read_to_end(&mut bytes)
        .map_err(missing)?;
    Ok(bytes)
}
