use crate::core::component::TickComponent;
use crate::core::signal::{Level, SignalKind};
use crate::core::width::counter_width;

/// Modulo-100 gating window generator.
///
/// Unlike the free-running register in `PulseClock`, the counter here is
/// capped by an explicit comparison: 100 is not a power of two, so the
/// 7-bit register wraps at 99 and the two wrap strategies must not be
/// unified. The counter update is evaluated before the window comparisons,
/// so both gates reflect the post-increment count within the same tick.
///
/// `gate_reset` is high for counts 5..10 and `gate_run` for counts 20..80.
/// The two windows are disjoint; keep them non-overlapping if the
/// thresholds are ever made configurable.
#[derive(Debug)]
pub struct GateGenerator {
    name: String,
    counter: u8,
    gate_reset: Level,
    gate_run: Level,
}

impl GateGenerator {
    pub const COUNTER_WIDTH: u32 = counter_width(99);
    const MODULUS: u8 = 100;

    const RESET_WINDOW: std::ops::Range<u8> = 5..10;
    const RUN_WINDOW: std::ops::Range<u8> = 20..80;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: 0,
            gate_reset: Level::new(),
            gate_run: Level::new(),
        }
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }

    pub fn gate_reset(&self) -> bool {
        self.gate_reset.get()
    }

    pub fn gate_run(&self) -> bool {
        self.gate_run.get()
    }
}

impl TickComponent for GateGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self) {
        self.counter = if self.counter >= Self::MODULUS - 1 {
            0
        } else {
            self.counter + 1
        };
        self.gate_reset.set(Self::RESET_WINDOW.contains(&self.counter));
        self.gate_run.set(Self::RUN_WINDOW.contains(&self.counter));
    }

    fn reset(&mut self) {
        self.counter = 0;
        self.gate_reset.clear();
        self.gate_run.clear();
    }

    fn signals(&self) -> Vec<(&'static str, SignalKind, bool)> {
        vec![
            ("gate_reset", SignalKind::Level, self.gate_reset.get()),
            ("gate_run", SignalKind::Level, self.gate_run.get()),
        ]
    }
}
