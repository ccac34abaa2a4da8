use super::{formatting_config, open_output, resolve_config, resolve_format};
use crate::cli;
use crate::io::output::{create_writer, StatsReport};
use crate::scoring::PopulationStats;
use crate::source::{CompanySource, JsonFileSource};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct StatsConfig {
    pub file: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_stats(config: StatsConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;

    let source = JsonFileSource::new(&config.file);
    let companies = source
        .load()
        .with_context(|| format!("Failed to load companies from {}", source.describe()))?;

    let report = StatsReport {
        source: source.describe(),
        company_count: companies.len(),
        stats: PopulationStats::from_companies(&companies, &settings.scoring()),
    };

    let format = resolve_format(config.format, &settings);
    let mut writer = create_writer(
        format,
        open_output(None)?,
        formatting_config(config.plain, false),
    );
    writer.write_stats(&report)
}
