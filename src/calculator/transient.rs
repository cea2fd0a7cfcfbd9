//! Values shown briefly before the display goes back to what it was.
//!
//! Memory recall and constants put a label on the secondary display and a
//! value on the primary one. A [`PendingRevert`] remembers what to put back
//! and when.

use std::time::Instant;

use super::display::DisplaySurface;

/// A one-shot restoration of the display.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRevert {
    secondary: String,
    /// `None` when the shown value should stay in the primary display.
    primary: Option<String>,
    due: Instant,
}

impl PendingRevert {
    pub fn new(secondary: impl Into<String>, primary: Option<String>, due: Instant) -> Self {
        Self {
            secondary: secondary.into(),
            primary,
            due,
        }
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Restore the saved text.
    pub fn apply(self, display: &mut impl DisplaySurface) {
        display.set_secondary(&self.secondary);
        if let Some(primary) = self.primary {
            display.set_primary(&primary);
        }
    }
}
