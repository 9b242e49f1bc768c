//! Bounded random-number generator
//!
//! Validates the two text inputs as an ordered integer range and draws a
//! uniform value from the closed interval. Exactly one of {result, error}
//! is shown at any time.

use shared::{Range, EMPTY_SENTINEL, INVALID_INPUT_MESSAGE, INVALID_RANGE_MESSAGE};
use thiserror::Error;
use tracing::{debug, warn};

use crate::random::RandomSource;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput { min: String, max: String },

    #[error("{}", INVALID_RANGE_MESSAGE)]
    InvalidRange { min: i64, max: i64 },
}

/// Lenient integer parse matching the page's number inputs.
///
/// Surrounding whitespace is ignored, an optional sign and a `0x` prefix are
/// accepted, and parsing stops at the first character that is not a digit,
/// so `"12abc"` is 12. Returns `None` when no digits lead the input or the
/// value does not fit in an `i64`.
pub fn parse_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    let digits = &body[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Parse both inputs into an ordered range
pub fn validate(min: &str, max: &str) -> Result<Range, RangeError> {
    match (parse_integer(min), parse_integer(max)) {
        (Some(low), Some(high)) => {
            Range::new(low, high).map_err(|_| RangeError::InvalidRange { min: low, max: high })
        }
        _ => Err(RangeError::InvalidInput {
            min: min.to_string(),
            max: max.to_string(),
        }),
    }
}

/// Validate the inputs and draw a uniform value from `[min, max]`
pub fn generate(min: &str, max: &str, rng: &mut dyn RandomSource) -> Result<i64, RangeError> {
    let range = validate(min, max)?;
    Ok(rng.range_inclusive(range))
}

/// Number generator widget state
#[derive(Debug, Clone)]
pub struct RangeRandomizer {
    min_input: String,
    max_input: String,
    defaults: Range,
    result: Option<i64>,
    error: Option<RangeError>,
}

impl RangeRandomizer {
    pub fn new(defaults: Range) -> Self {
        Self {
            min_input: defaults.min().to_string(),
            max_input: defaults.max().to_string(),
            defaults,
            result: None,
            error: None,
        }
    }

    pub fn set_min_input(&mut self, value: impl Into<String>) {
        self.min_input = value.into();
    }

    pub fn set_max_input(&mut self, value: impl Into<String>) {
        self.max_input = value.into();
    }

    pub fn min_input(&self) -> &str {
        &self.min_input
    }

    pub fn max_input(&self) -> &str {
        &self.max_input
    }

    /// Draw from the current inputs, updating the displayed result or error
    pub fn generate(&mut self, rng: &mut dyn RandomSource) -> Result<i64, RangeError> {
        match generate(&self.min_input, &self.max_input, rng) {
            Ok(value) => {
                debug!(min = %self.min_input, max = %self.max_input, value, "Number generated");
                metrics::counter!("widgets_numbers_generated_total").increment(1);
                self.result = Some(value);
                self.error = None;
                Ok(value)
            }
            Err(error) => {
                warn!(
                    min = %self.min_input,
                    max = %self.max_input,
                    error = %error,
                    "Range rejected"
                );
                metrics::counter!("widgets_range_errors_total").increment(1);
                self.result = None;
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Restore default inputs and clear both result and error
    pub fn reset(&mut self) {
        self.min_input = self.defaults.min().to_string();
        self.max_input = self.defaults.max().to_string();
        self.result = None;
        self.error = None;
    }

    pub fn result(&self) -> Option<i64> {
        self.result
    }

    /// Result label text, the empty sentinel when nothing is drawn
    pub fn result_text(&self) -> String {
        self.result
            .map(|value| value.to_string())
            .unwrap_or_else(|| EMPTY_SENTINEL.to_string())
    }

    pub fn error(&self) -> Option<&RangeError> {
        self.error.as_ref()
    }
}

impl Default for RangeRandomizer {
    fn default() -> Self {
        Self::new(Range::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, StdRandom};

    #[test]
    fn test_parse_integer_leniency() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("  -7 "), Some(-7));
        assert_eq!(parse_integer("+3"), Some(3));
        assert_eq!(parse_integer("12abc"), Some(12));
        assert_eq!(parse_integer("3.9"), Some(3));
        assert_eq!(parse_integer("0x1A"), Some(26));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_generate_stays_in_bounds() {
        let mut rng = StdRandom::seeded(11);
        for (min, max) in [(1, 2), (-5, 5), (0, 1000), (i64::MAX - 1, i64::MAX)] {
            for _ in 0..200 {
                let value = generate(&min.to_string(), &max.to_string(), &mut rng).unwrap();
                assert!(value >= min && value <= max, "{} outside [{}, {}]", value, min, max);
            }
        }
    }

    #[test]
    fn test_generate_covers_small_range_uniformly() {
        let mut rng = StdRandom::seeded(3);
        let mut counts = [0u32; 6];
        let trials = 6000;

        for _ in 0..trials {
            let value = generate("1", "6", &mut rng).unwrap();
            counts[(value - 1) as usize] += 1;
        }

        for count in counts {
            let share = count as f64 / trials as f64;
            assert!(share > 0.12 && share < 0.22, "skewed distribution: {:?}", counts);
        }
    }

    #[test]
    fn test_generate_rejects_unordered_range() {
        let mut rng = ScriptedRandom::new();
        assert_eq!(
            generate("5", "5", &mut rng),
            Err(RangeError::InvalidRange { min: 5, max: 5 })
        );
        assert_eq!(
            generate("10", "1", &mut rng),
            Err(RangeError::InvalidRange { min: 10, max: 1 })
        );
    }

    #[test]
    fn test_generate_rejects_non_numeric() {
        let mut rng = ScriptedRandom::new();
        assert!(matches!(
            generate("abc", "10", &mut rng),
            Err(RangeError::InvalidInput { .. })
        ));
        assert!(matches!(
            generate("1", "", &mut rng),
            Err(RangeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let invalid = RangeError::InvalidInput {
            min: "x".into(),
            max: "y".into(),
        };
        assert_eq!(invalid.to_string(), "Both inputs must be valid numbers.");

        let unordered = RangeError::InvalidRange { min: 2, max: 1 };
        assert_eq!(
            unordered.to_string(),
            "Minimum number must be less than maximum number."
        );
    }

    #[test]
    fn test_widget_result_and_error_are_exclusive() {
        let mut widget = RangeRandomizer::default();
        let mut rng = ScriptedRandom::new().with_numbers([37]);

        assert_eq!(widget.generate(&mut rng), Ok(37));
        assert_eq!(widget.result_text(), "37");
        assert!(widget.error().is_none());

        widget.set_min_input("50");
        widget.set_max_input("20");
        assert!(widget.generate(&mut rng).is_err());
        assert_eq!(widget.result(), None);
        assert_eq!(widget.result_text(), EMPTY_SENTINEL);
        assert_eq!(
            widget.error(),
            Some(&RangeError::InvalidRange { min: 50, max: 20 })
        );

        widget.set_min_input("1");
        assert!(widget.generate(&mut rng).is_ok());
        assert!(widget.error().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut widget = RangeRandomizer::default();
        widget.set_min_input("oops");
        let _ = widget.generate(&mut ScriptedRandom::new());
        assert!(widget.error().is_some());

        widget.reset();
        assert_eq!(widget.min_input(), "1");
        assert_eq!(widget.max_input(), "100");
        assert_eq!(widget.result_text(), EMPTY_SENTINEL);
        assert!(widget.error().is_none());
    }

    #[test]
    fn test_reset_uses_configured_defaults() {
        let mut widget = RangeRandomizer::new(Range::new(10, 20).unwrap());
        widget.set_max_input("500");
        widget.reset();
        assert_eq!(widget.min_input(), "10");
        assert_eq!(widget.max_input(), "20");
    }
}
