use std::cell::RefCell;
use std::rc::Rc;

use clockgen::{
    CountdownTimer, EngineError, GateGenerator, ParamSimpleClock, ParamTimerClock, PulseClock,
    SimpleClock, TickEngine, TraceRecorder, TwoPhaseClock,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RunSummary {
    ticks: u64,
    components: usize,
    signals: usize,
}

fn main() -> Result<(), EngineError> {
    env_logger::init();

    let mut engine = TickEngine::new(Some(64));
    engine.register(Box::new(SimpleClock::new("simple")))?;
    engine.register(Box::new(PulseClock::new("pulse32")))?;
    engine.register(Box::new(GateGenerator::new("gate100")))?;
    engine.register(Box::new(ParamSimpleClock::<10>::new("div10")))?;
    engine.register(Box::new(ParamTimerClock::<CountdownTimer, 10>::with_countdown("timer10")))?;
    engine.register(Box::new(TwoPhaseClock::<16>::new("twophase16")))?;

    let recorder = Rc::new(RefCell::new(TraceRecorder::new()));
    engine.add_observer(Box::new(Rc::clone(&recorder)));

    let final_tick = engine.run_to_limit();

    let recorder = recorder.borrow();
    println!("waveforms over {} ticks ('#' high, '.' low):\n", final_tick);
    print!("{}", recorder.render_waveform());

    let snapshot = engine.sample();
    let summary = RunSummary {
        ticks: final_tick,
        components: engine.component_names().len(),
        signals: snapshot.samples.len(),
    };
    println!("\n{:?}", summary);

    Ok(())
}
