// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod normalize;
pub mod pipeline;
pub mod presentation;
pub mod scoring;
pub mod source;

// Re-export commonly used types
pub use crate::core::{CompanyRecord, Error, Industry, RawValue, Result};

pub use crate::config::{JimotodeConfig, ScoringConfig};

pub use crate::normalize::{parse_flag, parse_numeric};

pub use crate::scoring::{
    attraction_score, calculate_score, rate_company, score_companies, score_population,
    score_to_rating, AxisRatings, AxisStats, PopulationStats, Rating, ScoredCompany,
};

pub use crate::pipeline::{
    apply, FilterState, FilterToggle, RankedCompany, RankingView, SortDirection, SortKey,
    SortState,
};

pub use crate::presentation::{build_cards, AccessPolicy, CompanyCard, ViewerAccess};

pub use crate::source::{parse_companies, CompanySource, JsonFileSource};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
