use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# jimotode configuration

[scoring]
# z-scores are clamped to +/- z_clamp before being mapped onto
# [score_floor, score_floor + score_span]
z_clamp = 1.5
score_floor = 20.0
score_span = 80.0
# rating given to an axis the company did not disclose
undisclosed_rating = 2
# annual holidays at or above this always rate 5
holiday_ceiling_days = 125.0
# means used when no company discloses an axis
fallback_salary_mean = 220000.0
fallback_log_headcount_mean = 2.5
fallback_holidays_mean = 120.0

[access]
# cards shown in full to viewers without full access
preview_count = 3
require_friend = true

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
