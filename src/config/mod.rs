// Sub-modules
mod core;
mod loader;
mod scoring;

pub use self::core::{
    default_output_format, default_preview_count, default_require_friend, AccessConfig,
    JimotodeConfig, OutputConfig,
};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use self::scoring::{
    default_fallback_holidays_mean, default_fallback_log_headcount_mean,
    default_fallback_salary_mean, default_holiday_ceiling_days, default_score_floor,
    default_score_span, default_undisclosed_rating, default_z_clamp, ScoringConfig,
};
