//! Navigation shell
//!
//! Exclusive selection over the fixed panel set: activating a panel
//! deactivates every other one.

use shared::Panel;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Navigation {
    active: Panel,
}

impl Navigation {
    pub fn new(initial: Panel) -> Self {
        Self { active: initial }
    }

    /// Make `panel` the only active panel. Returns whether the selection changed.
    pub fn activate(&mut self, panel: Panel) -> bool {
        if self.active == panel {
            debug!(panel = %panel, "Panel already active");
            return false;
        }

        debug!(from = %self.active, to = %panel, "Panel activated");
        self.active = panel;
        true
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.active == panel
    }
}
