//! Events delivered by the host page

use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// A trigger control was activated
    Click { target: String },
    /// A text field changed; `value` is its full new content
    Input { target: String, value: String },
}

impl HostEvent {
    pub fn click(target: &str) -> Self {
        HostEvent::Click {
            target: target.to_string(),
        }
    }

    pub fn input(target: &str, value: impl Into<String>) -> Self {
        HostEvent::Input {
            target: target.to_string(),
            value: value.into(),
        }
    }

    /// Parse one JSON line from the host
    pub fn parse(line: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(line).map_err(ServiceError::invalid_event)
    }

    pub fn target(&self) -> &str {
        match self {
            HostEvent::Click { target } | HostEvent::Input { target, .. } => target,
        }
    }
}
