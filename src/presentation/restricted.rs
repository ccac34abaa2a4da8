//! Restricted preview for viewers without full access.
//!
//! A viewer who is not logged in, has no user id, or (when the config asks
//! for it) is not a friend of the official account sees the first
//! `preview_count` cards in full. Every later card is restricted: its
//! attraction score is hidden and its chart shows the fixed demo ratings
//! instead of the real ones. The real ratings are never altered.

use crate::config::AccessConfig;
use crate::scoring::AxisRatings;
use serde::{Deserialize, Serialize};

/// Stand-in chart ratings shown on restricted cards.
pub const DEMO_SALARY_RATING: u8 = 4;
pub const DEMO_HEADCOUNT_RATING: u8 = 3;
pub const DEMO_HOLIDAYS_RATING: u8 = 4;

pub fn demo_ratings() -> AxisRatings {
    AxisRatings::new(
        DEMO_SALARY_RATING,
        DEMO_HEADCOUNT_RATING,
        DEMO_HOLIDAYS_RATING,
    )
}

/// Who is looking at the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewerAccess {
    pub logged_in: bool,
    pub is_friend: bool,
    pub user_id: Option<String>,
}

impl ViewerAccess {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn member(user_id: impl Into<String>, is_friend: bool) -> Self {
        Self {
            logged_in: true,
            is_friend,
            user_id: Some(user_id.into()),
        }
    }

    fn has_user_id(&self) -> bool {
        self.user_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }
}

/// Decides which cards a viewer may see in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    viewer: ViewerAccess,
    preview_count: usize,
    require_friend: bool,
}

impl AccessPolicy {
    pub fn new(viewer: ViewerAccess, config: &AccessConfig) -> Self {
        Self {
            viewer,
            preview_count: config.preview_count,
            require_friend: config.require_friend,
        }
    }

    pub fn viewer(&self) -> &ViewerAccess {
        &self.viewer
    }

    pub fn preview_count(&self) -> usize {
        self.preview_count
    }

    pub fn has_full_access(&self) -> bool {
        self.viewer.logged_in
            && self.viewer.has_user_id()
            && (!self.require_friend || self.viewer.is_friend)
    }

    /// Whether the card at zero-based `index` of the view is restricted.
    pub fn is_restricted(&self, index: usize) -> bool {
        !self.has_full_access() && index >= self.preview_count
    }

    /// Number of restricted cards among `item_count` visible ones.
    pub fn restricted_count(&self, item_count: usize) -> usize {
        if self.has_full_access() {
            0
        } else {
            item_count.saturating_sub(self.preview_count)
        }
    }

    /// Whether to invite the viewer to register.
    pub fn should_prompt_registration(&self, item_count: usize) -> bool {
        self.restricted_count(item_count) > 0
    }
}

/// Chart ratings to draw for a card.
pub fn display_ratings(actual: &AxisRatings, restricted: bool) -> AxisRatings {
    if restricted {
        demo_ratings()
    } else {
        *actual
    }
}

/// Attraction score to show for a card; hidden when restricted.
pub fn display_score(actual: f64, restricted: bool) -> Option<f64> {
    (!restricted).then_some(actual)
}
