use crate::core::component::TickComponent;
use crate::core::signal::{Level, SignalKind};
use crate::core::width::{counter_width, width_mask};

/// Two-phase clock with guaranteed dead time.
///
/// A modulo-`PERIOD / 4` counter drives a 2-bit phase index through
/// 0→1→2→3→0. `phase_a` is high only during phase 1 and `phase_b` only
/// during phase 3, so each output carries one quarter-period pulse per
/// cycle and the quarters in between keep both lines low. The period must
/// be a multiple of 4 and at least 8; anything else fails constant
/// evaluation.
#[derive(Debug)]
pub struct TwoPhaseClock<const PERIOD: u32> {
    name: String,
    counter: u32,
    phase: u8,
    phase_a: Level,
    phase_b: Level,
}

impl<const PERIOD: u32> TwoPhaseClock<PERIOD> {
    const PERIOD_OK: () = assert!(
        PERIOD >= 8 && PERIOD % 4 == 0,
        "TwoPhaseClock requires PERIOD >= 8 and PERIOD % 4 == 0"
    );

    pub const QUARTER_PERIOD: u32 = PERIOD / 4;
    pub const COUNTER_WIDTH: u32 = counter_width((Self::QUARTER_PERIOD - 1) as u64);
    pub const COUNTER_MASK: u32 = width_mask(Self::COUNTER_WIDTH) as u32;

    const PHASE_MASK: u8 = 0b11;

    pub fn new(name: impl Into<String>) -> Self {
        let _ = Self::PERIOD_OK;
        Self {
            name: name.into(),
            counter: 0,
            phase: 0,
            phase_a: Level::new(),
            phase_b: Level::new(),
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Current 2-bit phase index.
    pub fn phase(&self) -> u8 {
        self.phase
    }

    pub fn phase_a(&self) -> bool {
        self.phase_a.get()
    }

    pub fn phase_b(&self) -> bool {
        self.phase_b.get()
    }
}

impl<const PERIOD: u32> TickComponent for TwoPhaseClock<PERIOD> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self) {
        if self.counter == Self::QUARTER_PERIOD - 1 {
            self.counter = 0;
            self.phase = (self.phase + 1) & Self::PHASE_MASK;
        } else {
            self.counter = (self.counter + 1) & Self::COUNTER_MASK;
        }
        let (a, b) = match self.phase {
            1 => (true, false),
            3 => (false, true),
            _ => (false, false),
        };
        self.phase_a.set(a);
        self.phase_b.set(b);
    }

    fn reset(&mut self) {
        self.counter = 0;
        self.phase = 0;
        self.phase_a.clear();
        self.phase_b.clear();
    }

    fn signals(&self) -> Vec<(&'static str, SignalKind, bool)> {
        vec![
            ("phase_a", SignalKind::Level, self.phase_a.get()),
            ("phase_b", SignalKind::Level, self.phase_b.get()),
        ]
    }
}
