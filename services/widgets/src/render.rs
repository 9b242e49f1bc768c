//! Display instructions
//!
//! Rendering is a pure function from widget state to the list of element
//! updates the host page applies. Nothing here mutates widget state.

use serde::{Deserialize, Serialize};
use shared::elements::*;
use shared::{Panel, ACTIVE_CLASS, EMPTY_HISTORY_PLACEHOLDER, EMPTY_SENTINEL, FLIPPING_CLASS, FLIPPING_PLACEHOLDER};

use crate::coin_flip::CoinFlipEngine;
use crate::name_picker::NamePicker;
use crate::navigation::Navigation;
use crate::range_randomizer::RangeRandomizer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DisplayInstruction {
    SetText { element: String, text: String },
    SetValue { element: String, value: String },
    SetVisible { element: String, visible: bool },
    SetDisabled { element: String, disabled: bool },
    AddClass { element: String, class: String },
    RemoveClass { element: String, class: String },
    SetStyle { element: String, property: String, value: String },
    ReplaceChildren { element: String, items: Vec<ListItem> },
}

impl DisplayInstruction {
    pub fn set_text(element: &str, text: impl Into<String>) -> Self {
        Self::SetText {
            element: element.to_string(),
            text: text.into(),
        }
    }

    pub fn set_value(element: &str, value: impl Into<String>) -> Self {
        Self::SetValue {
            element: element.to_string(),
            value: value.into(),
        }
    }

    pub fn set_visible(element: &str, visible: bool) -> Self {
        Self::SetVisible {
            element: element.to_string(),
            visible,
        }
    }

    pub fn set_disabled(element: &str, disabled: bool) -> Self {
        Self::SetDisabled {
            element: element.to_string(),
            disabled,
        }
    }

    /// `AddClass` when `on`, otherwise `RemoveClass`
    pub fn toggle_class(element: &str, class: &str, on: bool) -> Self {
        let (element, class) = (element.to_string(), class.to_string());
        if on {
            Self::AddClass { element, class }
        } else {
            Self::RemoveClass { element, class }
        }
    }

    pub fn set_style(element: &str, property: &str, value: &str) -> Self {
        Self::SetStyle {
            element: element.to_string(),
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    /// Element this instruction targets
    pub fn element(&self) -> &str {
        match self {
            Self::SetText { element, .. }
            | Self::SetValue { element, .. }
            | Self::SetVisible { element, .. }
            | Self::SetDisabled { element, .. }
            | Self::AddClass { element, .. }
            | Self::RemoveClass { element, .. }
            | Self::SetStyle { element, .. }
            | Self::ReplaceChildren { element, .. } => element,
        }
    }
}

/// Active highlight on every panel and its nav trigger
pub fn render_navigation(nav: &Navigation) -> Vec<DisplayInstruction> {
    Panel::ALL
        .into_iter()
        .flat_map(|panel| {
            let active = nav.is_active(panel);
            [
                DisplayInstruction::toggle_class(panel.panel_id(), ACTIVE_CLASS, active),
                DisplayInstruction::toggle_class(panel.trigger_id(), ACTIVE_CLASS, active),
            ]
        })
        .collect()
}

/// Result label and error line
pub fn render_number_result(widget: &RangeRandomizer) -> Vec<DisplayInstruction> {
    let error = widget.error().map(|e| e.to_string()).unwrap_or_default();
    vec![
        DisplayInstruction::set_text(NUMBER_RESULT, widget.result_text()),
        DisplayInstruction::set_text(NUMBER_ERROR, error),
        DisplayInstruction::set_visible(NUMBER_ERROR, widget.error().is_some()),
    ]
}

/// Inputs plus result, used at load and after reset
pub fn render_number_generator(widget: &RangeRandomizer) -> Vec<DisplayInstruction> {
    let mut instructions = vec![
        DisplayInstruction::set_value(MIN_INPUT, widget.min_input()),
        DisplayInstruction::set_value(MAX_INPUT, widget.max_input()),
    ];
    instructions.extend(render_number_result(widget));
    instructions
}

/// Trigger, coin visual and result label
pub fn render_coin(engine: &CoinFlipEngine) -> Vec<DisplayInstruction> {
    let flipping = engine.is_flipping();
    let mut instructions = vec![
        DisplayInstruction::set_disabled(FLIP_BUTTON, flipping),
        DisplayInstruction::toggle_class(COIN_VISUAL, FLIPPING_CLASS, flipping),
    ];

    // The face keeps showing the previous outcome while the coin spins
    if let Some(side) = engine.last_outcome() {
        instructions.push(DisplayInstruction::set_text(COIN_VISUAL, side.face()));
        instructions.push(DisplayInstruction::set_style(COIN_VISUAL, "background-color", side.background()));
        instructions.push(DisplayInstruction::set_style(COIN_VISUAL, "border-color", side.border()));
    }

    let label = match (flipping, engine.last_outcome()) {
        (true, _) => FLIPPING_PLACEHOLDER,
        (false, Some(side)) => side.as_str(),
        (false, None) => EMPTY_SENTINEL,
    };
    instructions.push(DisplayInstruction::set_text(COIN_RESULT, label));
    instructions
}

pub fn render_flip_history(engine: &CoinFlipEngine) -> Vec<DisplayInstruction> {
    let mut items: Vec<ListItem> = engine
        .history()
        .map(|side| ListItem {
            text: side.as_str().to_string(),
            class: Some(side.css_class().to_string()),
        })
        .collect();

    if items.is_empty() {
        items.push(ListItem {
            text: EMPTY_HISTORY_PLACEHOLDER.to_string(),
            class: None,
        });
    }

    vec![DisplayInstruction::ReplaceChildren {
        element: FLIP_HISTORY.to_string(),
        items,
    }]
}

pub fn render_name_count(picker: &NamePicker) -> Vec<DisplayInstruction> {
    vec![DisplayInstruction::set_text(NAME_COUNT, picker.count().to_string())]
}

pub fn render_name_results(picker: &NamePicker) -> Vec<DisplayInstruction> {
    vec![
        DisplayInstruction::set_text(NAME_RESULT, picker.current().display_text()),
        DisplayInstruction::set_text(PREVIOUS_NAME_RESULT, picker.previous().display_text()),
    ]
}

/// Text area, count and both winner slots, used at load and after clear
pub fn render_name_picker(picker: &NamePicker) -> Vec<DisplayInstruction> {
    let mut instructions = vec![DisplayInstruction::set_value(NAME_LIST, picker.text())];
    instructions.extend(render_name_count(picker));
    instructions.extend(render_name_results(picker));
    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use serde_json::json;

    fn text_of<'a>(instructions: &'a [DisplayInstruction], target: &str) -> Option<&'a str> {
        instructions.iter().rev().find_map(|instruction| match instruction {
            DisplayInstruction::SetText { element, text } if element == target => Some(text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_navigation_marks_one_panel_active() {
        let mut nav = Navigation::default();
        nav.activate(Panel::Coin);
        let instructions = render_navigation(&nav);

        let added: Vec<_> = instructions
            .iter()
            .filter(|i| matches!(i, DisplayInstruction::AddClass { .. }))
            .map(|i| i.element())
            .collect();
        assert_eq!(added, vec!["coin-panel", "nav-coin"]);
        assert_eq!(instructions.len(), 6);
    }

    #[test]
    fn test_number_error_hides_result() {
        let mut widget = RangeRandomizer::default();
        widget.set_min_input("9");
        widget.set_max_input("3");
        let _ = widget.generate(&mut ScriptedRandom::new());

        let instructions = render_number_result(&widget);
        assert_eq!(text_of(&instructions, NUMBER_RESULT), Some(EMPTY_SENTINEL));
        assert_eq!(
            text_of(&instructions, NUMBER_ERROR),
            Some("Minimum number must be less than maximum number.")
        );
        assert!(instructions.contains(&DisplayInstruction::set_visible(NUMBER_ERROR, true)));
    }

    #[test]
    fn test_number_reset_renders_default_inputs() {
        let widget = RangeRandomizer::default();
        let instructions = render_number_generator(&widget);
        assert_eq!(instructions[0], DisplayInstruction::set_value(MIN_INPUT, "1"));
        assert_eq!(instructions[1], DisplayInstruction::set_value(MAX_INPUT, "100"));
        assert!(instructions.contains(&DisplayInstruction::set_visible(NUMBER_ERROR, false)));
    }

    #[test]
    fn test_coin_render_while_flipping_and_after() {
        let mut engine = CoinFlipEngine::default();
        let mut rng = ScriptedRandom::new().with_bools([true]);
        let flip = engine.request_flip(&mut rng).unwrap();

        let spinning = render_coin(&engine);
        assert!(spinning.contains(&DisplayInstruction::set_disabled(FLIP_BUTTON, true)));
        assert!(spinning.contains(&DisplayInstruction::toggle_class(COIN_VISUAL, FLIPPING_CLASS, true)));
        assert_eq!(text_of(&spinning, COIN_RESULT), Some("Flipping..."));

        engine.complete(&flip);
        let revealed = render_coin(&engine);
        assert!(revealed.contains(&DisplayInstruction::set_disabled(FLIP_BUTTON, false)));
        assert!(revealed.contains(&DisplayInstruction::toggle_class(COIN_VISUAL, FLIPPING_CLASS, false)));
        assert_eq!(text_of(&revealed, COIN_VISUAL), Some("😀"));
        assert_eq!(text_of(&revealed, COIN_RESULT), Some("Heads"));
        assert!(revealed.contains(&DisplayInstruction::set_style(
            COIN_VISUAL,
            "border-color",
            "#f39c12"
        )));
    }

    #[test]
    fn test_empty_history_renders_placeholder() {
        let engine = CoinFlipEngine::default();
        assert_eq!(
            render_flip_history(&engine),
            vec![DisplayInstruction::ReplaceChildren {
                element: FLIP_HISTORY.to_string(),
                items: vec![ListItem {
                    text: "No flips yet...".into(),
                    class: None
                }],
            }]
        );
    }

    #[test]
    fn test_history_rows_carry_side_class() {
        let mut engine = CoinFlipEngine::default();
        let mut rng = ScriptedRandom::new().with_bools([false]);
        let flip = engine.request_flip(&mut rng).unwrap();
        engine.complete(&flip);

        let rendered = render_flip_history(&engine);
        let DisplayInstruction::ReplaceChildren { items, .. } = &rendered[0] else {
            panic!("expected list replacement");
        };
        assert_eq!(
            items,
            &vec![ListItem {
                text: "Tails".into(),
                class: Some("tails".into())
            }]
        );
    }

    #[test]
    fn test_name_picker_render() {
        let mut picker = NamePicker::new();
        picker.set_text("Ann, Ben");
        picker.pick(&mut ScriptedRandom::new().with_indices([1]));

        let instructions = render_name_picker(&picker);
        assert_eq!(text_of(&instructions, NAME_COUNT), Some("2"));
        assert_eq!(text_of(&instructions, NAME_RESULT), Some("Ben"));
        assert_eq!(text_of(&instructions, PREVIOUS_NAME_RESULT), Some(EMPTY_SENTINEL));
    }

    #[test]
    fn test_instruction_wire_format() {
        let value = serde_json::to_value(DisplayInstruction::set_text(NAME_COUNT, "3")).unwrap();
        assert_eq!(
            value,
            json!({ "op": "set_text", "element": "name-count", "text": "3" })
        );

        let list = DisplayInstruction::ReplaceChildren {
            element: FLIP_HISTORY.to_string(),
            items: vec![ListItem {
                text: "No flips yet...".into(),
                class: None,
            }],
        };
        assert_eq!(
            serde_json::to_value(list).unwrap(),
            json!({
                "op": "replace_children",
                "element": "flip-history",
                "items": [{ "text": "No flips yet..." }]
            })
        );
    }
}
