//! Random name picker
//!
//! The candidate list is never stored: it is re-derived from the raw text on
//! every read.

use shared::{EMPTY_SENTINEL, NO_NAMES_SENTINEL};
use tracing::{debug, info};

use crate::random::RandomSource;

/// Split on runs of commas or newlines, trim, drop empty pieces
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Current or previous winner slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Winner {
    #[default]
    Empty,
    /// Last pick ran on an empty list
    NoNames,
    Name(String),
}

impl Winner {
    pub fn display_text(&self) -> &str {
        match self {
            Winner::Empty => EMPTY_SENTINEL,
            Winner::NoNames => NO_NAMES_SENTINEL,
            Winner::Name(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(String),
    /// No candidates in the list
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct NamePicker {
    raw_text: String,
    current: Winner,
    previous: Winner,
}

impl NamePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw text; returns the new live count
    pub fn set_text(&mut self, raw: impl Into<String>) -> usize {
        self.raw_text = raw.into();
        self.count()
    }

    pub fn text(&self) -> &str {
        &self.raw_text
    }

    pub fn names(&self) -> Vec<String> {
        parse_names(&self.raw_text)
    }

    pub fn count(&self) -> usize {
        self.names().len()
    }

    pub fn pick(&mut self, rng: &mut dyn RandomSource) -> PickOutcome {
        let mut names = self.names();
        if names.is_empty() {
            debug!("Pick requested with no names");
            self.current = Winner::NoNames;
            self.previous = Winner::Empty;
            return PickOutcome::Empty;
        }

        let index = rng.index(names.len());
        let selected = names.swap_remove(index);

        if let Winner::Name(prior) = std::mem::take(&mut self.current) {
            self.previous = Winner::Name(prior);
        }
        self.current = Winner::Name(selected.clone());

        metrics::counter!("widgets_names_picked_total").increment(1);
        info!(
            candidates = names.len() + 1,
            index,
            winner = %selected,
            "Name picked"
        );
        PickOutcome::Picked(selected)
    }

    /// Empty the text and both winner slots
    pub fn clear(&mut self) {
        self.raw_text.clear();
        self.current = Winner::Empty;
        self.previous = Winner::Empty;
    }

    pub fn current(&self) -> &Winner {
        &self.current
    }

    pub fn previous(&self) -> &Winner {
        &self.previous
    }
}
