use super::component::TickComponent;
use super::error::EngineError;
use super::trace::TickSnapshot;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Observer trait for tick events
pub trait TickObserver {
    /// Called when the global tick advances
    fn on_tick_advance(&mut self, old_tick: u64, new_tick: u64);

    /// Called after all components have been advanced, with a snapshot of
    /// every output signal for the completed tick
    fn on_tick_complete(&mut self, snapshot: &TickSnapshot);
}

/// Allows an observer to be shared between the engine and the caller.
impl<T: TickObserver> TickObserver for Rc<RefCell<T>> {
    fn on_tick_advance(&mut self, old_tick: u64, new_tick: u64) {
        self.borrow_mut().on_tick_advance(old_tick, new_tick);
    }

    fn on_tick_complete(&mut self, snapshot: &TickSnapshot) {
        self.borrow_mut().on_tick_complete(snapshot);
    }
}

/// Advances every registered component exactly once per global tick.
///
/// Components are independent leaves; within a tick they are evaluated in
/// registration order, which only affects snapshot row order, never
/// component behavior.
pub struct TickEngine {
    components: Vec<Box<dyn TickComponent>>,
    observers: Vec<Box<dyn TickObserver>>,
    current_tick: u64,
    max_ticks: Option<u64>,
}

impl TickEngine {
    /// Create a new TickEngine with an optional tick limit
    pub fn new(max_ticks: Option<u64>) -> Self {
        Self {
            components: Vec::new(),
            observers: Vec::new(),
            current_tick: 0,
            max_ticks,
        }
    }

    /// Register a component; names must be unique within the engine
    pub fn register(&mut self, component: Box<dyn TickComponent>) -> Result<(), EngineError> {
        if self.components.iter().any(|c| c.name() == component.name()) {
            return Err(EngineError::DuplicateComponent(component.name().to_string()));
        }
        self.components.push(component);
        Ok(())
    }

    /// Add an observer to the engine
    pub fn add_observer(&mut self, observer: Box<dyn TickObserver>) {
        self.observers.push(observer);
    }

    /// Advance every component by one global tick
    pub fn step(&mut self) {
        let old_tick = self.current_tick;
        self.current_tick += 1;
        debug!("=== Tick {} ===", self.current_tick);

        for component in &mut self.components {
            component.tick();
        }

        let snapshot = self.sample();
        for observer in &mut self.observers {
            observer.on_tick_advance(old_tick, snapshot.tick);
        }
        for observer in &mut self.observers {
            observer.on_tick_complete(&snapshot);
        }
    }

    /// Step `ticks` times
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Step until the configured tick limit, returns the final tick count
    pub fn run_to_limit(&mut self) -> u64 {
        if let Some(max) = self.max_ticks {
            while self.current_tick < max {
                self.step();
            }
        }
        self.current_tick
    }

    /// Reset every component and the global tick counter, independent of
    /// prior history
    pub fn reset(&mut self) {
        debug!("=== Engine reset at tick {} ===", self.current_tick);
        for component in &mut self.components {
            component.reset();
        }
        self.current_tick = 0;
    }

    /// Sample every output signal without advancing the tick
    pub fn sample(&self) -> TickSnapshot {
        let mut samples = Vec::new();
        for component in &self.components {
            for (signal, kind, value) in component.signals() {
                samples.push(crate::core::signal::SignalSample {
                    component: component.name().to_string(),
                    signal: signal.to_string(),
                    kind,
                    value,
                });
            }
        }
        TickSnapshot {
            tick: self.current_tick,
            samples,
        }
    }

    /// Read one signal by component and signal name
    pub fn signal(&self, component: &str, signal: &str) -> Result<bool, EngineError> {
        let comp = self
            .components
            .iter()
            .find(|c| c.name() == component)
            .ok_or_else(|| EngineError::ComponentNotFound(component.to_string()))?;
        comp.signals()
            .iter()
            .find(|(name, _, _)| *name == signal)
            .map(|(_, _, value)| *value)
            .ok_or_else(|| EngineError::SignalNotFound(format!("{}.{}", component, signal)))
    }

    /// Get the current global tick count
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Names of all registered components, in registration order
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::signal::SignalKind;

    // Minimal component counting its own ticks and resets.
    struct Counter {
        name: String,
        ticks: u64,
        resets: u64,
    }

    impl Counter {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                ticks: 0,
                resets: 0,
            }
        }
    }

    impl TickComponent for Counter {
        fn name(&self) -> &str {
            &self.name
        }

        fn tick(&mut self) {
            self.ticks += 1;
        }

        fn reset(&mut self) {
            self.ticks = 0;
            self.resets += 1;
        }

        fn signals(&self) -> Vec<(&'static str, SignalKind, bool)> {
            vec![("odd", SignalKind::Level, self.ticks % 2 == 1)]
        }
    }

    struct CountingObserver {
        advances: u64,
        completions: u64,
        last_tick: u64,
    }

    impl TickObserver for CountingObserver {
        fn on_tick_advance(&mut self, old_tick: u64, new_tick: u64) {
            assert_eq!(new_tick, old_tick + 1);
            self.advances += 1;
        }

        fn on_tick_complete(&mut self, snapshot: &TickSnapshot) {
            self.completions += 1;
            self.last_tick = snapshot.tick;
        }
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let mut engine = TickEngine::new(None);
        engine.register(Box::new(Counter::new("a"))).unwrap();
        let result = engine.register(Box::new(Counter::new("a")));
        assert_eq!(
            result,
            Err(EngineError::DuplicateComponent("a".to_string()))
        );
    }

    #[test]
    fn test_step_advances_all_components() {
        let mut engine = TickEngine::new(None);
        engine.register(Box::new(Counter::new("a"))).unwrap();
        engine.register(Box::new(Counter::new("b"))).unwrap();

        engine.step();
        assert_eq!(engine.current_tick(), 1);
        assert_eq!(engine.signal("a", "odd"), Ok(true));
        assert_eq!(engine.signal("b", "odd"), Ok(true));

        engine.step();
        assert_eq!(engine.signal("a", "odd"), Ok(false));
    }

    #[test]
    fn test_signal_lookup_errors() {
        let mut engine = TickEngine::new(None);
        engine.register(Box::new(Counter::new("a"))).unwrap();
        assert_eq!(
            engine.signal("missing", "odd"),
            Err(EngineError::ComponentNotFound("missing".to_string()))
        );
        assert_eq!(
            engine.signal("a", "missing"),
            Err(EngineError::SignalNotFound("a.missing".to_string()))
        );
    }

    #[test]
    fn test_run_to_limit() {
        let mut engine = TickEngine::new(Some(10));
        engine.register(Box::new(Counter::new("a"))).unwrap();
        assert_eq!(engine.run_to_limit(), 10);
        // Already at the limit: no further stepping.
        assert_eq!(engine.run_to_limit(), 10);
    }

    #[test]
    fn test_observers_notified_per_step() {
        let observer = Rc::new(RefCell::new(CountingObserver {
            advances: 0,
            completions: 0,
            last_tick: 0,
        }));
        let mut engine = TickEngine::new(None);
        engine.register(Box::new(Counter::new("a"))).unwrap();
        engine.add_observer(Box::new(Rc::clone(&observer)));

        engine.run(5);
        assert_eq!(observer.borrow().advances, 5);
        assert_eq!(observer.borrow().completions, 5);
        assert_eq!(observer.borrow().last_tick, 5);
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut engine = TickEngine::new(None);
        engine.register(Box::new(Counter::new("a"))).unwrap();
        engine.run(7);
        engine.reset();
        assert_eq!(engine.current_tick(), 0);
        assert_eq!(engine.signal("a", "odd"), Ok(false));
    }

    #[test]
    fn test_sample_includes_all_signals() {
        let mut engine = TickEngine::new(None);
        engine.register(Box::new(Counter::new("a"))).unwrap();
        engine.register(Box::new(Counter::new("b"))).unwrap();
        let snapshot = engine.sample();
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.samples.len(), 2);
        assert_eq!(snapshot.samples[0].component, "a");
        assert_eq!(snapshot.samples[1].component, "b");
    }
}
