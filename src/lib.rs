pub mod core;
pub mod generators;

// Re-export commonly used types
pub use crate::core::component::TickComponent;
pub use crate::core::engine::{TickEngine, TickObserver};
pub use crate::core::error::EngineError;
pub use crate::core::signal::{Level, Pulse, SignalKind, SignalSample};
pub use crate::core::timer::{CountdownTimer, Timer};
pub use crate::core::trace::{TickSnapshot, TraceRecorder};
pub use crate::generators::{
    GateGenerator, ParamSimpleClock, ParamTimerClock, PulseClock, SimpleClock, TwoPhaseClock,
};
