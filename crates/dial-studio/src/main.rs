use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};

use dial_engine::logging::{LoggingConfig, init_logging};
use dial_ui::prelude::*;

/// How long the demo runs when no duration is given on the command line.
const DEFAULT_RUN_SECS: u64 = 5;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let run_secs = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("expected a run time in seconds, got '{arg}'"))?,
        None => DEFAULT_RUN_SECS,
    };

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          DIAL CHRONOMETER v0.1         ║");
    println!("  ║   headless surface  ·  {run_secs:>4} s run     ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let ticks = Rc::new(Cell::new(0u64));
    let counter = ticks.clone();

    let stats = Application::new()
        .title("Dial Chronometer")
        .size(240.0, 240.0)
        .image("dial", 200.0, 200.0)
        .image("big_hand", 12.0, 70.0)
        .image("small_hand", 8.0, 90.0)
        .run_for_ms(run_secs.saturating_mul(1_000))
        .run_widget(move |res| {
            let face = ClockFace::new(ClockImages {
                dial: res.images.require("dial")?,
                big_hand: res.images.require("big_hand")?,
                small_hand: res.images.require("small_hand")?,
            });

            let mut chrono = AnalogChronometer::new(face, res.scheduler.clone(), res.clock.clone())
                .on_tick(move |chrono| {
                    counter.set(counter.get() + 1);
                    let angles = chrono.clock_face().angles();
                    let elapsed = chrono.elapsed_ms() / 1_000;
                    log::info!(
                        "tick {:>3}  {:02}:{:02}  big={:6.2}°  small={:6.2}°",
                        counter.get(),
                        (elapsed / 60) % 60,
                        elapsed % 60,
                        angles.big_hand_degrees,
                        angles.small_hand_degrees,
                    );
                });
            chrono.start();
            Ok(chrono.into())
        })?;

    println!();
    println!("  ticks     {:>6}", ticks.get());
    println!("  frames    {:>6}", stats.frames);
    println!("  timers    {:>6}", stats.timers_dispatched);
    println!("  draws     {:>6}", stats.items_presented);
    println!();

    Ok(())
}
