//! CLI command implementations.
//!
//! Available commands:
//! - **rank**: score, filter and rank a company export
//! - **stats**: show the population statistics ratings are measured against
//! - **init**: write a default `.jimotode.toml`

pub mod init;
pub mod rank;
pub mod stats;

pub use init::init_config;
pub use rank::{handle_rank, RankConfig};
pub use stats::{handle_stats, StatsConfig};

use crate::config::{load_config, load_config_from, JimotodeConfig};
use crate::formatting::FormattingConfig;
use crate::io::output::OutputFormat;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Explicit `--config` file, or the nearest `.jimotode.toml` above the
/// current directory, or defaults.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<JimotodeConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Format from the command line, else from the config's `default_format`.
pub(crate) fn resolve_format(
    cli_format: Option<crate::cli::OutputFormat>,
    config: &JimotodeConfig,
) -> OutputFormat {
    if let Some(format) = cli_format {
        return format.into();
    }
    let configured = config.output().default_format;
    configured.parse().unwrap_or_else(|_| {
        log::warn!(
            "Unknown output.default_format '{}', using terminal output",
            configured
        );
        OutputFormat::Terminal
    })
}

pub(crate) fn formatting_config(plain: bool, to_file: bool) -> FormattingConfig {
    if plain || to_file {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

pub(crate) fn open_output(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
