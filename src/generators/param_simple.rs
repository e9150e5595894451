use crate::core::component::TickComponent;
use crate::core::signal::{Level, SignalKind};
use crate::core::width::{counter_width, width_mask};

/// Square-wave divider with a build-time period.
///
/// The output toggles every `PERIOD / 2` ticks. The counter register is
/// sized to the smallest width holding `PERIOD / 2 - 1`, so the storage
/// cost follows the period instead of a fixed worst case. Periods below 4
/// are rejected during constant evaluation.
#[derive(Debug)]
pub struct ParamSimpleClock<const PERIOD: u32> {
    name: String,
    counter: u32,
    output: Level,
}

impl<const PERIOD: u32> ParamSimpleClock<PERIOD> {
    const PERIOD_OK: () = assert!(PERIOD >= 4, "ParamSimpleClock requires PERIOD >= 4");

    pub const HALF_PERIOD: u32 = PERIOD / 2;
    pub const COUNTER_WIDTH: u32 = counter_width((Self::HALF_PERIOD - 1) as u64);
    pub const COUNTER_MASK: u32 = width_mask(Self::COUNTER_WIDTH) as u32;

    pub fn new(name: impl Into<String>) -> Self {
        let _ = Self::PERIOD_OK;
        Self {
            name: name.into(),
            counter: 0,
            output: Level::new(),
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn output(&self) -> bool {
        self.output.get()
    }
}

impl<const PERIOD: u32> TickComponent for ParamSimpleClock<PERIOD> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self) {
        if self.counter == Self::HALF_PERIOD - 1 {
            self.counter = 0;
            self.output.toggle();
        } else {
            self.counter = (self.counter + 1) & Self::COUNTER_MASK;
        }
    }

    fn reset(&mut self) {
        self.counter = 0;
        self.output.clear();
    }

    fn signals(&self) -> Vec<(&'static str, SignalKind, bool)> {
        vec![("output", SignalKind::Level, self.output.get())]
    }
}
