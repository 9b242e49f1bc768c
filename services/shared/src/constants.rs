/// Shared constants for the randomizer widgets
///
/// Display sentinels, default inputs and timing values used by both the
/// widget core and the host bridge.

/// Placeholder shown wherever no result has been produced yet
pub const EMPTY_SENTINEL: &str = "--";

/// Result text shown after a pick on an empty name list
pub const NO_NAMES_SENTINEL: &str = "No names";

/// Default lower bound restored by the number generator reset
pub const DEFAULT_RANGE_MIN: i64 = 1;

/// Default upper bound restored by the number generator reset
pub const DEFAULT_RANGE_MAX: i64 = 100;

/// Maximum number of completed flips kept in the history
pub const MAX_FLIP_HISTORY: usize = 10;

/// Coin animation duration in milliseconds (matches the page stylesheet)
pub const FLIP_ANIMATION_MS: u64 = 1_000;

/// Result label text while a flip is animating
pub const FLIPPING_PLACEHOLDER: &str = "Flipping...";

/// Single row rendered when the flip history is empty
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No flips yet...";

/// CSS class toggled on the coin visual during the animation
pub const FLIPPING_CLASS: &str = "flipping";

/// CSS class marking the active panel and its nav trigger
pub const ACTIVE_CLASS: &str = "active";

pub const INVALID_INPUT_MESSAGE: &str = "Both inputs must be valid numbers.";
pub const INVALID_RANGE_MESSAGE: &str = "Minimum number must be less than maximum number.";

/// Host page element ids
pub mod elements {
    pub const MIN_INPUT: &str = "min-num";
    pub const MAX_INPUT: &str = "max-num";
    pub const GENERATE_BUTTON: &str = "generate-num-btn";
    pub const CLEAR_NUMBER_BUTTON: &str = "clear-num-btn";
    pub const NUMBER_RESULT: &str = "number-result";
    pub const NUMBER_ERROR: &str = "num-error";

    pub const FLIP_BUTTON: &str = "flip-coin-btn";
    pub const COIN_VISUAL: &str = "coin-visual";
    pub const COIN_RESULT: &str = "coin-result";
    pub const FLIP_HISTORY: &str = "flip-history";
    pub const RESET_HISTORY_BUTTON: &str = "reset-history-btn";

    pub const NAME_LIST: &str = "name-list";
    pub const PICK_NAME_BUTTON: &str = "pick-name-btn";
    pub const CLEAR_NAME_BUTTON: &str = "clear-name-btn";
    pub const NAME_COUNT: &str = "name-count";
    pub const NAME_RESULT: &str = "name-result";
    pub const PREVIOUS_NAME_RESULT: &str = "prev-name-result";
}
