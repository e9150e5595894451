use crate::core::component::TickComponent;
use crate::core::signal::{Level, Pulse, SignalKind};
use crate::core::width::{counter_width, width_mask};

/// Free-running modulo-32 generator.
///
/// The counter wraps by bit-width overflow of its 5-bit register, never by
/// an explicit modulus comparison. Two outputs are derived from it each
/// tick: `pulse`, a level that holds high for exactly the tick in which
/// the counter reads 31, and `event`, a one-shot fired when the counter
/// reads 15.
#[derive(Debug)]
pub struct PulseClock {
    name: String,
    counter: u8,
    pulse: Level,
    event: Pulse,
}

impl PulseClock {
    pub const COUNTER_WIDTH: u32 = counter_width(31);
    const COUNTER_MASK: u8 = width_mask(Self::COUNTER_WIDTH) as u8;

    const PULSE_COUNT: u8 = 31;
    const EVENT_COUNT: u8 = 15;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: 0,
            pulse: Level::new(),
            event: Pulse::new(),
        }
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// High for exactly the tick in which the counter reads 31.
    pub fn pulse(&self) -> bool {
        self.pulse.get()
    }

    /// True only during the tick in which the counter reads 15.
    pub fn event(&self) -> bool {
        self.event.is_raised()
    }
}

impl TickComponent for PulseClock {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self) {
        self.event.settle();
        // Free-running: 31 + 1 truncates to 0 in the 5-bit register.
        self.counter = self.counter.wrapping_add(1) & Self::COUNTER_MASK;
        self.pulse.set(self.counter == Self::PULSE_COUNT);
        if self.counter == Self::EVENT_COUNT {
            self.event.raise();
        }
    }

    fn reset(&mut self) {
        self.counter = 0;
        self.pulse.clear();
        self.event.settle();
    }

    fn signals(&self) -> Vec<(&'static str, SignalKind, bool)> {
        vec![
            ("pulse", SignalKind::Level, self.pulse.get()),
            ("event", SignalKind::Pulse, self.event.is_raised()),
        ]
    }
}
