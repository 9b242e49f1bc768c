/// Type-safe wrappers for widget domain primitives
///
/// These types enforce their invariants at construction time so the
/// widget controllers never hold an unordered range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Range is not ordered: min {min} must be less than max {max}")]
    RangeNotOrdered { min: i64, max: i64 },
}

/// Closed integer interval with `min < max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    /// Create a new Range with validation
    pub fn new(min: i64, max: i64) -> Result<Self, ValidationError> {
        if min >= max {
            return Err(ValidationError::RangeNotOrdered { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: DEFAULT_RANGE_MIN,
            max: DEFAULT_RANGE_MAX,
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Outcome of one fair coin trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    /// Map a fair boolean draw onto a side (`true` is heads)
    pub fn from_bool(heads: bool) -> Self {
        if heads {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoinSide::Heads => "Heads",
            CoinSide::Tails => "Tails",
        }
    }

    /// CSS class used on history rows
    pub fn css_class(&self) -> &'static str {
        match self {
            CoinSide::Heads => "heads",
            CoinSide::Tails => "tails",
        }
    }

    /// Glyph shown on the coin face once revealed
    pub fn face(&self) -> &'static str {
        match self {
            CoinSide::Heads => "😀",
            CoinSide::Tails => "🪙",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            CoinSide::Heads => "var(--heads-color)",
            CoinSide::Tails => "var(--tails-color)",
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            CoinSide::Heads => "#f39c12",
            CoinSide::Tails => "#138496",
        }
    }
}

impl std::fmt::Display for CoinSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tool sections toggled by the navigation shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    Number,
    Coin,
    Names,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Number, Panel::Coin, Panel::Names];

    /// Element id of the panel section
    pub fn panel_id(&self) -> &'static str {
        match self {
            Panel::Number => "number-panel",
            Panel::Coin => "coin-panel",
            Panel::Names => "name-panel",
        }
    }

    /// Element id of the nav control that activates this panel
    pub fn trigger_id(&self) -> &'static str {
        match self {
            Panel::Number => "nav-number",
            Panel::Coin => "nav-coin",
            Panel::Names => "nav-name",
        }
    }

    pub fn from_trigger(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.trigger_id() == id)
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.panel_id())
    }
}
