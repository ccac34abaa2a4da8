use anyhow::Result;
use clap::Parser;
use jimotode::cli::{Cli, Commands};
use jimotode::commands::{RankConfig, StatsConfig};
use jimotode::pipeline::SortState;
use jimotode::presentation::ViewerAccess;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Rank {
            file,
            industry,
            relocation_free,
            housing_allowance,
            remote_work,
            flextime,
            special_leave,
            no_fixed_overtime,
            search,
            sort,
            order,
            top,
            format,
            output,
            config,
            logged_in,
            friend,
            user_id,
            plain,
        } => jimotode::commands::handle_rank(RankConfig {
            file,
            industry,
            relocation_free,
            housing_allowance,
            remote_work,
            flextime,
            special_leave,
            no_fixed_overtime,
            search,
            sort: SortState::new(sort.into(), order.into()),
            top,
            format,
            output,
            config,
            viewer: ViewerAccess {
                logged_in,
                is_friend: friend,
                user_id,
            },
            plain,
        }),
        Commands::Stats {
            file,
            format,
            config,
            plain,
        } => jimotode::commands::handle_stats(StatsConfig {
            file,
            format,
            config,
            plain,
        }),
        Commands::Init { force } => jimotode::commands::init_config(force),
    }
}

// RUST_LOG still wins when set; -v raises the default from warn.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
