//! Output signal primitives.
//!
//! Generators expose two kinds of boolean outputs. A [`Level`] is a passive
//! value: it holds whatever it was last set to and is readable between
//! ticks. A [`Pulse`] is an active one-shot notification: it is observed
//! high only during the tick in which it was raised and settles back to
//! low at the start of the next tick. Keeping the two as distinct types
//! prevents a one-shot from being accidentally latched as a stored level.

use serde::{Deserialize, Serialize};

/// Classification of an output signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    /// Persistent level, stable between ticks.
    Level,
    /// One-shot notification, meaningful only in the tick it fires.
    Pulse,
}

/// A passive boolean level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Level {
    value: bool,
}

impl Level {
    /// Create a level in its reset state (low).
    pub fn new() -> Self {
        Self { value: false }
    }

    /// Current value.
    pub fn get(&self) -> bool {
        self.value
    }

    /// Drive the level to `value`.
    pub fn set(&mut self, value: bool) {
        self.value = value;
    }

    /// Invert the level.
    pub fn toggle(&mut self) {
        self.value = !self.value;
    }

    /// Return to the reset state (low).
    pub fn clear(&mut self) {
        self.value = false;
    }
}

/// An active one-shot notification.
///
/// The owning component calls [`Pulse::settle`] at the start of each tick
/// and [`Pulse::raise`] when the firing condition holds, so the pulse is
/// high for exactly one tick per firing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pulse {
    raised: bool,
}

impl Pulse {
    /// Create a pulse in its reset state (not raised).
    pub fn new() -> Self {
        Self { raised: false }
    }

    /// Fire the notification for the current tick.
    pub fn raise(&mut self) {
        self.raised = true;
    }

    /// True only during the tick in which the pulse was raised.
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// Clear a previous firing. Called at the start of the next tick.
    pub fn settle(&mut self) {
        self.raised = false;
    }
}

/// A sampled output value, tagged with its owning component and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSample {
    pub component: String,
    pub signal: String,
    pub kind: SignalKind,
    pub value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_holds_value() {
        let mut level = Level::new();
        assert!(!level.get());
        level.set(true);
        assert!(level.get());
        assert!(level.get(), "level must be stable across reads");
        level.toggle();
        assert!(!level.get());
        level.toggle();
        level.clear();
        assert!(!level.get());
    }

    #[test]
    fn test_pulse_is_one_shot() {
        let mut pulse = Pulse::new();
        assert!(!pulse.is_raised());
        pulse.raise();
        assert!(pulse.is_raised());
        // Next tick begins: the firing settles without an explicit reset.
        pulse.settle();
        assert!(!pulse.is_raised());
    }

    #[test]
    fn test_pulse_settle_without_raise_is_harmless() {
        let mut pulse = Pulse::new();
        pulse.settle();
        assert!(!pulse.is_raised());
    }
}
