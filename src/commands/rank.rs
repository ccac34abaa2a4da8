use super::{formatting_config, open_output, resolve_config, resolve_format};
use crate::cli;
use crate::config::ScoringConfig;
use crate::core::{CompanyRecord, Industry};
use crate::io::output::{create_writer, RankingReport};
use crate::pipeline::{apply, FilterState, FilterToggle, RankingView, SortState};
use crate::presentation::{AccessPolicy, ViewerAccess};
use crate::scoring::score_population;
use crate::source::{CompanySource, JsonFileSource};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct RankConfig {
    pub file: PathBuf,
    pub industry: Option<String>,
    pub relocation_free: bool,
    pub housing_allowance: bool,
    pub remote_work: bool,
    pub flextime: bool,
    pub special_leave: bool,
    pub no_fixed_overtime: bool,
    pub search: Option<String>,
    pub sort: SortState,
    pub top: Option<usize>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub viewer: ViewerAccess,
    pub plain: bool,
}

impl RankConfig {
    /// Filter state described by the command-line flags.
    pub fn filter_state(&self) -> Result<FilterState> {
        let mut filter = FilterState::new();

        for (toggle, enabled) in [
            (FilterToggle::RelocationFree, self.relocation_free),
            (FilterToggle::HousingAllowance, self.housing_allowance),
            (FilterToggle::RemoteWork, self.remote_work),
            (FilterToggle::Flextime, self.flextime),
            (FilterToggle::SpecialLeave, self.special_leave),
            (FilterToggle::NoFixedOvertime, self.no_fixed_overtime),
        ] {
            filter.set(toggle, enabled);
        }

        if let Some(name) = &self.industry {
            let industry: Industry = name.parse()?;
            filter.select_industry(industry);
        }

        if let Some(query) = &self.search {
            filter.query = query.clone();
        }

        Ok(filter)
    }
}

/// Score `companies` against their own population and run the pipeline.
pub fn rank_companies(
    companies: &[CompanyRecord],
    scoring: &ScoringConfig,
    filter: &FilterState,
    sort: &SortState,
) -> RankingView {
    let (_, scored) = score_population(companies, scoring);
    apply(&scored, filter, sort)
}

pub fn handle_rank(config: RankConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let filter = config.filter_state()?;

    let source = JsonFileSource::new(&config.file);
    let companies = source
        .load()
        .with_context(|| format!("Failed to load companies from {}", source.describe()))?;

    let mut view = rank_companies(&companies, &settings.scoring(), &filter, &config.sort);
    if let Some(top) = config.top {
        view = view.truncate(top);
    }

    let policy = AccessPolicy::new(config.viewer.clone(), &settings.access());
    if !policy.has_full_access() {
        log::debug!(
            "Viewer without full access: showing {} cards in full",
            policy.preview_count()
        );
    }

    let report = RankingReport::new(&view, &filter, config.sort, &policy);
    let format = resolve_format(config.format, &settings);
    let formatting = formatting_config(config.plain, config.output.is_some());

    let mut writer = create_writer(format, open_output(config.output.as_ref())?, formatting);
    writer.write_ranking(&report)?;

    if let Some(path) = &config.output {
        log::info!("Wrote ranking of {} companies to {}", report.companies.len(), path.display());
    }
    Ok(())
}
