pub mod gate;
pub mod param_simple;
pub mod param_timer;
pub mod pulse;
pub mod simple;
pub mod two_phase;

pub use gate::GateGenerator;
pub use param_simple::ParamSimpleClock;
pub use param_timer::ParamTimerClock;
pub use pulse::PulseClock;
pub use simple::SimpleClock;
pub use two_phase::TwoPhaseClock;
