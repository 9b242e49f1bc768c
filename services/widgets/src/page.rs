//! Page controller
//!
//! Owns one controller per widget and routes host events to them. Each
//! handled event yields the display instructions for the widget it touched;
//! a flip additionally yields the ticket the caller must complete once the
//! animation delay has passed.

use std::time::Duration;

use shared::elements::*;
use shared::errors::ServiceError;
use shared::{Panel, Range, FLIP_ANIMATION_MS, MAX_FLIP_HISTORY};
use tracing::{debug, info};

use crate::coin_flip::{CoinFlipEngine, PendingFlip};
use crate::events::HostEvent;
use crate::name_picker::NamePicker;
use crate::navigation::Navigation;
use crate::random::RandomSource;
use crate::range_randomizer::RangeRandomizer;
use crate::render::{self, DisplayInstruction};

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub flip_delay: Duration,
    pub history_limit: usize,
    pub default_range: Range,
    pub initial_panel: Panel,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            flip_delay: Duration::from_millis(FLIP_ANIMATION_MS),
            history_limit: MAX_FLIP_HISTORY,
            default_range: Range::default(),
            initial_panel: Panel::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PageOutput {
    pub instructions: Vec<DisplayInstruction>,
    /// Set when the event started a flip
    pub scheduled_flip: Option<PendingFlip>,
}

impl PageOutput {
    fn render(instructions: Vec<DisplayInstruction>) -> Self {
        Self {
            instructions,
            scheduled_flip: None,
        }
    }
}

pub struct Page {
    navigation: Navigation,
    numbers: RangeRandomizer,
    coin: CoinFlipEngine,
    names: NamePicker,
    rng: Box<dyn RandomSource + Send>,
}

impl Page {
    pub fn new(options: PageOptions, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            navigation: Navigation::new(options.initial_panel),
            numbers: RangeRandomizer::new(options.default_range),
            coin: CoinFlipEngine::new(options.flip_delay, options.history_limit),
            names: NamePicker::new(),
            rng,
        }
    }

    /// Full render of every widget, applied once at load
    pub fn initial_render(&self) -> Vec<DisplayInstruction> {
        let mut instructions = render::render_navigation(&self.navigation);
        instructions.extend(render::render_number_generator(&self.numbers));
        instructions.extend(render::render_coin(&self.coin));
        instructions.extend(render::render_flip_history(&self.coin));
        instructions.extend(render::render_name_picker(&self.names));
        instructions
    }

    pub fn handle(&mut self, event: HostEvent) -> Result<PageOutput, ServiceError> {
        debug!(?event, "Handling host event");
        match event {
            HostEvent::Click { target } => self.handle_click(&target),
            HostEvent::Input { target, value } => self.handle_input(&target, value),
        }
    }

    fn handle_click(&mut self, target: &str) -> Result<PageOutput, ServiceError> {
        if let Some(panel) = Panel::from_trigger(target) {
            self.navigation.activate(panel);
            return Ok(PageOutput::render(render::render_navigation(&self.navigation)));
        }

        let output = match target {
            GENERATE_BUTTON => {
                // Failures are shown inline through the rendered error line
                let _ = self.numbers.generate(&mut *self.rng);
                PageOutput::render(render::render_number_result(&self.numbers))
            }
            CLEAR_NUMBER_BUTTON => {
                self.numbers.reset();
                PageOutput::render(render::render_number_generator(&self.numbers))
            }
            FLIP_BUTTON => match self.coin.request_flip(&mut *self.rng) {
                Some(flip) => PageOutput {
                    instructions: render::render_coin(&self.coin),
                    scheduled_flip: Some(flip),
                },
                None => PageOutput::default(),
            },
            RESET_HISTORY_BUTTON => {
                self.coin.reset_history();
                PageOutput::render(render::render_flip_history(&self.coin))
            }
            PICK_NAME_BUTTON => {
                self.names.pick(&mut *self.rng);
                PageOutput::render(render::render_name_results(&self.names))
            }
            CLEAR_NAME_BUTTON => {
                self.names.clear();
                PageOutput::render(render::render_name_picker(&self.names))
            }
            other => return Err(ServiceError::unknown_target(other)),
        };
        Ok(output)
    }

    fn handle_input(&mut self, target: &str, value: String) -> Result<PageOutput, ServiceError> {
        match target {
            MIN_INPUT => {
                self.numbers.set_min_input(value);
                Ok(PageOutput::default())
            }
            MAX_INPUT => {
                self.numbers.set_max_input(value);
                Ok(PageOutput::default())
            }
            NAME_LIST => {
                self.names.set_text(value);
                Ok(PageOutput::render(render::render_name_count(&self.names)))
            }
            other => Err(ServiceError::unknown_target(other)),
        }
    }

    /// Reveal a flip scheduled by an earlier event.
    ///
    /// Returns no instructions when the ticket is not the in-flight flip.
    pub fn complete_flip(&mut self, flip: &PendingFlip) -> Vec<DisplayInstruction> {
        match self.coin.complete(flip) {
            Some(outcome) => {
                info!(flip_id = flip.id(), %outcome, "Reveal rendered");
                let mut instructions = render::render_coin(&self.coin);
                instructions.extend(render::render_flip_history(&self.coin));
                instructions
            }
            None => Vec::new(),
        }
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn numbers(&self) -> &RangeRandomizer {
        &self.numbers
    }

    pub fn coin(&self) -> &CoinFlipEngine {
        &self.coin
    }

    pub fn names(&self) -> &NamePicker {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use shared::errors::ErrorCategory;

    fn page_with(rng: ScriptedRandom) -> Page {
        Page::new(PageOptions::default(), Box::new(rng))
    }

    #[test]
    fn test_initial_render_covers_every_widget() {
        let page = page_with(ScriptedRandom::new());
        let instructions = page.initial_render();

        for element in [
            "number-panel",
            MIN_INPUT,
            NUMBER_RESULT,
            FLIP_BUTTON,
            COIN_RESULT,
            FLIP_HISTORY,
            NAME_LIST,
            NAME_COUNT,
            PREVIOUS_NAME_RESULT,
        ] {
            assert!(
                instructions.iter().any(|i| i.element() == element),
                "missing {}",
                element
            );
        }
    }

    #[test]
    fn test_nav_click_switches_panel() {
        let mut page = page_with(ScriptedRandom::new());
        let output = page.handle(HostEvent::click("nav-name")).unwrap();

        assert_eq!(page.navigation().active(), Panel::Names);
        assert!(output
            .instructions
            .contains(&DisplayInstruction::toggle_class("name-panel", "active", true)));
        assert!(output.scheduled_flip.is_none());
    }

    #[test]
    fn test_number_inputs_feed_generate() {
        let mut page = page_with(ScriptedRandom::new().with_numbers([15]));
        page.handle(HostEvent::input(MIN_INPUT, "10")).unwrap();
        page.handle(HostEvent::input(MAX_INPUT, "20")).unwrap();

        let output = page.handle(HostEvent::click(GENERATE_BUTTON)).unwrap();
        assert_eq!(page.numbers().result(), Some(15));
        assert!(output
            .instructions
            .contains(&DisplayInstruction::set_text(NUMBER_RESULT, "15")));
    }

    #[test]
    fn test_flip_schedules_once() {
        let mut page = page_with(ScriptedRandom::new().with_bools([true, false]));

        let first = page.handle(HostEvent::click(FLIP_BUTTON)).unwrap();
        let flip = first.scheduled_flip.expect("flip scheduled");
        assert_eq!(flip.delay(), Duration::from_millis(1000));

        let second = page.handle(HostEvent::click(FLIP_BUTTON)).unwrap();
        assert!(second.scheduled_flip.is_none());
        assert!(second.instructions.is_empty());

        let reveal = page.complete_flip(&flip);
        assert!(reveal.contains(&DisplayInstruction::set_text(COIN_RESULT, "Heads")));
        assert_eq!(page.coin().history_len(), 1);
        assert!(page.complete_flip(&flip).is_empty());
    }

    #[test]
    fn test_name_input_updates_live_count() {
        let mut page = page_with(ScriptedRandom::new());
        let output = page
            .handle(HostEvent::input(NAME_LIST, "Alice, Bob\nCarol,, Dan"))
            .unwrap();
        assert_eq!(
            output.instructions,
            vec![DisplayInstruction::set_text(NAME_COUNT, "4")]
        );
    }

    #[test]
    fn test_unknown_targets_are_rejected() {
        let mut page = page_with(ScriptedRandom::new());

        let error = page.handle(HostEvent::click("self-destruct")).unwrap_err();
        assert_eq!(error.category, ErrorCategory::NotFound);

        let error = page
            .handle(HostEvent::input(GENERATE_BUTTON, "x"))
            .unwrap_err();
        assert_eq!(error.code, "NOT_FOUND_TARGET");
    }
}
