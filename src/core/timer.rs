//! External timer primitive used by the timer-delegating clock variant.

/// Contract for a one-shot countdown timer.
///
/// `arm(n)` schedules exactly one `fired` notification after exactly `n`
/// further ticks, unless the timer is re-armed first. A re-arm before
/// expiry cancels the pending notification. An implementation that drops
/// or duplicates a notification is an unrecoverable collaborator fault;
/// the clocks built on top of this trait cannot detect or repair it.
pub trait Timer {
    /// Schedule one notification `ticks` ticks from now, cancelling any
    /// pending one. `ticks` must be at least 1.
    fn arm(&mut self, ticks: u64);

    /// Advance the timer by one tick.
    fn tick(&mut self);

    /// True only during the tick in which the armed count expired.
    fn fired(&self) -> bool;
}

/// Reference countdown timer honoring single-notification-per-arm.
#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    remaining: Option<u64>,
    fired: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            remaining: None,
            fired: false,
        }
    }

    /// True while a notification is pending.
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }
}

impl Timer for CountdownTimer {
    fn arm(&mut self, ticks: u64) {
        debug_assert!(ticks >= 1, "arm count must be at least one tick");
        self.remaining = Some(ticks.max(1));
        self.fired = false;
    }

    fn tick(&mut self) {
        self.fired = false;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                self.remaining = None;
                self.fired = true;
            }
        }
    }

    fn fired(&self) -> bool {
        self.fired
    }
}
