//! Type-safe star rating.
//!
//! Axis ratings are integers on a 1-5 scale. Wrapping them in [`Rating`]
//! keeps the bounds in the type: any construction clamps into range, so a
//! rating read back from anywhere is always displayable.
//!
//! ```rust
//! use jimotode::scoring::Rating;
//!
//! assert_eq!(Rating::new(7).value(), 5);
//! assert_eq!(Rating::from_score(60.0), Rating::new(3));
//! ```

use serde::{Deserialize, Serialize};

/// Star rating on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Create a rating, clamping to [1, 5].
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Convert a 20-100 score into a rating.
    ///
    /// Each 20-point band maps to one star: `round(score / 20)` clamped to
    /// [1, 5]. Ties round half away from zero, so 50.0 rates 3. A NaN score
    /// rates 1.
    pub fn from_score(score: f64) -> Self {
        let stars = (score / 20.0).round();
        if stars.is_nan() {
            return Self::MIN;
        }
        Self(stars.clamp(1.0, 5.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
