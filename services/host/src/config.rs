use anyhow::Context;
use serde::Deserialize;
use shared::errors::ServiceError;
use shared::{Range, DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN, FLIP_ANIMATION_MS, MAX_FLIP_HISTORY};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use widgets::PageOptions;

/// Largest accepted `WIDGETS_HISTORY_LIMIT`
pub const MAX_HISTORY_LIMIT: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub widgets: WidgetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    pub flip_delay_ms: u64,
    pub history_limit: usize,
    pub range_default_min: i64,
    pub range_default_max: i64,
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config = Config {
            widgets: WidgetConfig {
                flip_delay_ms: parse_var(&lookup, "WIDGETS_FLIP_DELAY_MS", FLIP_ANIMATION_MS)?,
                history_limit: parse_var(&lookup, "WIDGETS_HISTORY_LIMIT", MAX_FLIP_HISTORY)?,
                range_default_min: parse_var(&lookup, "WIDGETS_RANGE_DEFAULT_MIN", DEFAULT_RANGE_MIN)?,
                range_default_max: parse_var(&lookup, "WIDGETS_RANGE_DEFAULT_MAX", DEFAULT_RANGE_MAX)?,
                rng_seed: lookup("WIDGETS_RNG_SEED")
                    .map(|seed| seed.parse())
                    .transpose()
                    .context("Invalid WIDGETS_RNG_SEED")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if self.widgets.history_limit == 0 {
            return Err(ServiceError::invalid_config(
                "WIDGETS_HISTORY_LIMIT",
                "must be at least 1",
            ));
        }
        if self.widgets.history_limit > MAX_HISTORY_LIMIT {
            return Err(ServiceError::invalid_config(
                "WIDGETS_HISTORY_LIMIT",
                format!("must be at most {}", MAX_HISTORY_LIMIT),
            ));
        }
        self.default_range()?;
        Ok(())
    }

    pub fn default_range(&self) -> Result<Range, ServiceError> {
        Range::new(self.widgets.range_default_min, self.widgets.range_default_max)
            .map_err(|e| ServiceError::invalid_config("WIDGETS_RANGE_DEFAULT_MIN", e.to_string()))
    }

    pub fn page_options(&self) -> Result<PageOptions, ServiceError> {
        Ok(PageOptions {
            flip_delay: Duration::from_millis(self.widgets.flip_delay_ms),
            history_limit: self.widgets.history_limit,
            default_range: self.default_range()?,
            ..PageOptions::default()
        })
    }
}

fn parse_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw.parse().with_context(|| format!("Invalid {key}")),
        None => Ok(default),
    }
}
