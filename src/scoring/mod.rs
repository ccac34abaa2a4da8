//! Company rating engine.
//!
//! ```text
//! CompanyRecord[] ──▶ PopulationStats::from_companies   (whole loaded set)
//!        │                      │
//!        └──────────┬───────────┘
//!                   ▼
//!             rate_company        ← clamped z-score per axis,
//!                   │               undisclosed / holiday overrides
//!                   ▼
//!            attraction_score     ← mean of three ratings, 1 decimal
//! ```
//!
//! Every function here is pure and total. The restricted-viewer stand-in
//! ratings are a display concern and live in [`crate::presentation`].

pub mod attraction;
pub mod calculator;
pub mod score_types;
pub mod stats;

pub use attraction::{
    attraction_score, rate_company, score_companies, score_population, AxisRatings,
    ScoredCompany, UndisclosedAxes,
};
pub use calculator::{calculate_score, calculate_score_with, score_against, score_to_rating};
pub use score_types::Rating;
pub use stats::{AxisStats, PopulationStats};
