use crate::core::component::TickComponent;
use crate::core::signal::{Level, SignalKind};
use crate::core::timer::{CountdownTimer, Timer};

/// Clock that delegates its periodicity to an external timer.
///
/// Instead of a self-maintained counter, the clock arms an injected
/// [`Timer`] for `PERIOD - 1` ticks; each expiry toggles the output and
/// re-arms for the same count. Correctness rests on the timer contract:
/// one arm, exactly one notification.
#[derive(Debug)]
pub struct ParamTimerClock<T: Timer, const PERIOD: u32> {
    name: String,
    timer: T,
    output: Level,
}

impl<const PERIOD: u32> ParamTimerClock<CountdownTimer, PERIOD> {
    /// Construct with the crate's reference countdown timer.
    pub fn with_countdown(name: impl Into<String>) -> Self {
        Self::new(name, CountdownTimer::new())
    }
}

impl<T: Timer, const PERIOD: u32> ParamTimerClock<T, PERIOD> {
    const PERIOD_OK: () = assert!(PERIOD >= 2, "ParamTimerClock requires PERIOD >= 2");

    /// Arm count used on start and on every re-arm.
    pub const ARM_TICKS: u64 = (PERIOD - 1) as u64;

    pub fn new(name: impl Into<String>, mut timer: T) -> Self {
        let _ = Self::PERIOD_OK;
        timer.arm(Self::ARM_TICKS);
        Self {
            name: name.into(),
            timer,
            output: Level::new(),
        }
    }

    pub fn output(&self) -> bool {
        self.output.get()
    }
}

impl<T: Timer, const PERIOD: u32> TickComponent for ParamTimerClock<T, PERIOD> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self) {
        self.timer.tick();
        if self.timer.fired() {
            self.output.toggle();
            self.timer.arm(Self::ARM_TICKS);
        }
    }

    fn reset(&mut self) {
        self.output.clear();
        self.timer.arm(Self::ARM_TICKS);
    }

    fn signals(&self) -> Vec<(&'static str, SignalKind, bool)> {
        vec![("output", SignalKind::Level, self.output.get())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Timer double recording every arm count it receives.
    #[derive(Debug)]
    struct RecordingTimer {
        inner: CountdownTimer,
        arm_counts: Vec<u64>,
    }

    impl RecordingTimer {
        fn new() -> Self {
            Self {
                inner: CountdownTimer::new(),
                arm_counts: Vec::new(),
            }
        }
    }

    impl Timer for RecordingTimer {
        fn arm(&mut self, ticks: u64) {
            self.arm_counts.push(ticks);
            self.inner.arm(ticks);
        }

        fn tick(&mut self) {
            self.inner.tick();
        }

        fn fired(&self) -> bool {
            self.inner.fired()
        }
    }

    #[test]
    fn test_toggles_on_every_expiry() {
        let mut clock = ParamTimerClock::<_, 10>::with_countdown("timer10");
        assert!(!clock.output());
        let mut toggles = Vec::new();
        for t in 1..=36u64 {
            let before = clock.output();
            clock.tick();
            if clock.output() != before {
                toggles.push(t);
            }
        }
        // Armed for 9 ticks on start and after each expiry.
        assert_eq!(toggles, vec![9, 18, 27, 36]);
    }

    #[test]
    fn test_rearm_uses_period_constant() {
        let mut clock = ParamTimerClock::<_, 5>::new("timer5", RecordingTimer::new());
        for _ in 0..20 {
            clock.tick();
        }
        // Every arm, initial and re-arm alike, carries PERIOD - 1.
        assert!(clock.timer.arm_counts.len() > 1);
        assert!(clock.timer.arm_counts.iter().all(|&n| n == 4));
    }

    #[test]
    fn test_minimum_period_2() {
        let mut clock = ParamTimerClock::<_, 2>::with_countdown("timer2");
        for t in 1..=6u64 {
            clock.tick();
            assert_eq!(clock.output(), t % 2 == 1, "wrong at tick {}", t);
        }
    }

    #[test]
    fn test_reset_rearms_timer() {
        let mut clock = ParamTimerClock::<_, 10>::with_countdown("timer10");
        for _ in 0..12 {
            clock.tick();
        }
        assert!(clock.output());
        clock.reset();
        assert!(!clock.output());
        // The restarted clock behaves like a fresh one.
        let mut toggles = Vec::new();
        for t in 1..=18u64 {
            let before = clock.output();
            clock.tick();
            if clock.output() != before {
                toggles.push(t);
            }
        }
        assert_eq!(toggles, vec![9, 18]);
    }
}
