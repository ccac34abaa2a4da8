use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jimotode")]
#[command(about = "Rank local employers by an attraction score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score, filter and rank companies from a JSON export
    Rank {
        /// JSON array of company records
        file: PathBuf,

        /// Only show one industry (label or slug, e.g. "it", "製造業")
        #[arg(long)]
        industry: Option<String>,

        /// Only companies without relocation
        #[arg(long = "relocation-free")]
        relocation_free: bool,

        /// Only companies paying a housing allowance
        #[arg(long = "housing-allowance")]
        housing_allowance: bool,

        /// Only companies allowing remote work
        #[arg(long = "remote-work")]
        remote_work: bool,

        /// Only companies with flextime
        #[arg(long)]
        flextime: bool,

        /// Only companies with special leave
        #[arg(long = "special-leave")]
        special_leave: bool,

        /// Exclude companies with a fixed overtime system
        #[arg(long = "no-fixed-overtime")]
        no_fixed_overtime: bool,

        /// Case-insensitive company name search
        #[arg(short, long)]
        search: Option<String>,

        /// Sort key
        #[arg(long, value_enum, default_value = "attraction-score")]
        sort: SortKeyArg,

        /// Sort order
        #[arg(long, value_enum, default_value = "desc")]
        order: SortOrderArg,

        /// Show only the top N companies
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Output format (defaults to the config's output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .jimotode.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Viewer is logged in
        #[arg(long = "logged-in")]
        logged_in: bool,

        /// Viewer has added the official account as a friend
        #[arg(long)]
        friend: bool,

        /// Viewer's user id
        #[arg(long = "user-id", env = "JIMOTODE_USER_ID")]
        user_id: Option<String>,

        /// Plain output: no colors, ASCII rating bars
        #[arg(long)]
        plain: bool,
    },

    /// Print the population statistics the ratings are computed against
    Stats {
        /// JSON array of company records
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file (defaults to the nearest .jimotode.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Plain output: no colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .jimotode.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    AttractionScore,
    StartingSalary,
    BaseSalary,
    Revenue,
    Employees,
    Holidays,
    Overtime,
    YearsOfService,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<SortKeyArg> for crate::pipeline::SortKey {
    fn from(key: SortKeyArg) -> Self {
        use crate::pipeline::SortKey;
        match key {
            SortKeyArg::AttractionScore => SortKey::AttractionScore,
            SortKeyArg::StartingSalary => SortKey::StartingSalary,
            SortKeyArg::BaseSalary => SortKey::BaseSalary,
            SortKeyArg::Revenue => SortKey::Revenue,
            SortKeyArg::Employees => SortKey::NumberOfEmployees,
            SortKeyArg::Holidays => SortKey::AnnualHolidays,
            SortKeyArg::Overtime => SortKey::AverageOvertimeHours,
            SortKeyArg::YearsOfService => SortKey::AverageYearsOfService,
            SortKeyArg::Age => SortKey::AverageAge,
        }
    }
}

impl From<SortOrderArg> for crate::pipeline::SortDirection {
    fn from(order: SortOrderArg) -> Self {
        match order {
            SortOrderArg::Asc => crate::pipeline::SortDirection::Ascending,
            SortOrderArg::Desc => crate::pipeline::SortDirection::Descending,
        }
    }
}
