use crate::core::signal::SignalKind;

/// The per-tick contract implemented by every generator.
///
/// A component is advanced exactly once per global tick by the engine and
/// never signals another component. Within one `tick` call the counter or
/// phase update happens before the output comparisons, so every signal
/// returned by `signals` reflects the post-update state for that tick.
pub trait TickComponent {
    /// Instance name, unique within an engine.
    fn name(&self) -> &str;

    /// Advance the component by one global tick.
    fn tick(&mut self);

    /// Return counter, phase, and outputs to their documented power-on
    /// values, independent of prior history.
    fn reset(&mut self);

    /// Current value of every named output signal.
    fn signals(&self) -> Vec<(&'static str, SignalKind, bool)>;
}
