use crate::core::component::TickComponent;
use crate::core::signal::{Level, SignalKind};

/// Divide-by-two clock: the output level inverts on every tick.
#[derive(Debug)]
pub struct SimpleClock {
    name: String,
    output: Level,
}

impl SimpleClock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: Level::new(),
        }
    }

    pub fn output(&self) -> bool {
        self.output.get()
    }
}

impl TickComponent for SimpleClock {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self) {
        self.output.toggle();
    }

    fn reset(&mut self) {
        self.output.clear();
    }

    fn signals(&self) -> Vec<(&'static str, SignalKind, bool)> {
        vec![("output", SignalKind::Level, self.output.get())]
    }
}
