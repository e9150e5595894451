//! Signal trace recording and waveform rendering.

use crate::core::engine::TickObserver;
use crate::core::signal::SignalSample;
use serde::{Deserialize, Serialize};

/// All output signals sampled at the end of one global tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub tick: u64,
    pub samples: Vec<SignalSample>,
}

/// Observer that accumulates one snapshot per tick.
///
/// Attach it to an engine via `Rc<RefCell<..>>` so the history stays
/// readable after the run:
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use clockgen::{SimpleClock, TickEngine, TraceRecorder};
///
/// let mut engine = TickEngine::new(None);
/// engine.register(Box::new(SimpleClock::new("clk"))).unwrap();
/// let recorder = Rc::new(RefCell::new(TraceRecorder::new()));
/// engine.add_observer(Box::new(Rc::clone(&recorder)));
/// engine.run(4);
/// assert_eq!(recorder.borrow().signal_history("clk", "output"), vec![true, false, true, false]);
/// ```
#[derive(Debug, Default)]
pub struct TraceRecorder {
    history: Vec<TickSnapshot>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Recorded snapshots, one per completed tick.
    pub fn history(&self) -> &[TickSnapshot] {
        &self.history
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Discard the recorded history, e.g. after an engine reset.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Per-tick values of one signal across the recorded history.
    pub fn signal_history(&self, component: &str, signal: &str) -> Vec<bool> {
        self.history
            .iter()
            .filter_map(|snapshot| {
                snapshot
                    .samples
                    .iter()
                    .find(|s| s.component == component && s.signal == signal)
                    .map(|s| s.value)
            })
            .collect()
    }

    /// Render the recorded history as an ASCII waveform, one row per
    /// signal ('#' high, '.' low), in first-seen order.
    pub fn render_waveform(&self) -> String {
        let mut labels: Vec<(String, String)> = Vec::new();
        for snapshot in &self.history {
            for sample in &snapshot.samples {
                let key = (sample.component.clone(), sample.signal.clone());
                if !labels.contains(&key) {
                    labels.push(key);
                }
            }
        }

        let mut out = String::new();
        for (component, signal) in &labels {
            let row: String = self
                .signal_history(component, signal)
                .iter()
                .map(|&high| if high { '#' } else { '.' })
                .collect();
            out.push_str(&format!("{:>24} | {}\n", format!("{}.{}", component, signal), row));
        }
        out
    }
}

impl TickObserver for TraceRecorder {
    fn on_tick_advance(&mut self, _old_tick: u64, _new_tick: u64) {}

    fn on_tick_complete(&mut self, snapshot: &TickSnapshot) {
        self.history.push(snapshot.clone());
    }
}
