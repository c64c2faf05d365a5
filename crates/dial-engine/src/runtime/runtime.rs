use std::rc::Rc;

use anyhow::{Result, ensure};

use crate::coords::Vec2;
use crate::core::{App as CoreApp, AppControl, FrameCtx, FrameTime, SurfaceCtx};
use crate::time::TimerQueue;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Size of the headless surface in logical pixels.
    pub surface_size: Vec2,
    /// Stop after this many milliseconds of clock time. `None` runs until the
    /// app exits or no timer is left to wait for.
    pub run_for_ms: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "dial".to_string(),
            surface_size: Vec2::new(320.0, 320.0),
            run_for_ms: None,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    /// Asks for a frame to be drawn before the loop waits again.
    pub fn request_redraw(&mut self) {
        self.commands.push(Command::Redraw);
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

enum Command {
    Redraw,
    Exit,
}

/// Counters reported when the loop returns.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub timers_dispatched: u64,
    pub items_presented: u64,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, timers: Rc<TimerQueue>, app: A) -> Result<RunStats>
    where
        A: CoreApp,
    {
        ensure!(
            config.surface_size.is_finite()
                && config.surface_size.x > 0.0
                && config.surface_size.y > 0.0,
            "invalid surface size {:?} for '{}'",
            config.surface_size,
            config.title
        );

        let mut state = AppState::new(config, timers, app);
        state.run();
        Ok(state.stats)
    }
}

struct AppState<A>
where
    A: CoreApp,
{
    config: RuntimeConfig,
    timers: Rc<TimerQueue>,
    app: A,

    stats: RunStats,
    redraw_requested: bool,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp,
{
    fn new(config: RuntimeConfig, timers: Rc<TimerQueue>, app: A) -> Self {
        Self {
            config,
            timers,
            app,
            stats: RunStats::default(),
            // The first frame is always drawn.
            redraw_requested: true,
            exit_requested: false,
        }
    }

    fn apply(&mut self, control: AppControl, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::Redraw => self.redraw_requested = true,
                Command::Exit => self.exit_requested = true,
            }
        }
        if control == AppControl::Exit {
            self.exit_requested = true;
        }
    }

    fn run(&mut self) {
        let clock = self.timers.clock().clone();
        let started = clock.now_ms();
        let stop_at = self.config.run_for_ms.map(|ms| started.saturating_add(ms));

        log::info!("runtime '{}' started at t={}ms", self.config.title, started);

        let mut ctx = RuntimeCtx::default();
        let control = self.app.on_start(&mut ctx);
        self.apply(control, ctx);

        loop {
            if self.redraw_requested && !self.exit_requested {
                self.draw_frame(clock.now_ms());
            }
            if self.exit_requested {
                break;
            }

            let wake = match (self.timers.next_deadline(), stop_at) {
                (Some(deadline), Some(stop)) => deadline.min(stop),
                (Some(deadline), None) => deadline,
                (None, Some(stop)) => stop,
                (None, None) => {
                    log::info!("no timers armed; nothing left to wait for");
                    break;
                }
            };
            clock.wait_until(wake);

            let now = clock.now_ms();
            if stop_at.is_some_and(|stop| now >= stop) {
                log::debug!("run time elapsed at t={now}ms");
                break;
            }

            for due in self.timers.take_due(now) {
                let mut ctx = RuntimeCtx::default();
                let control = self.app.on_timer(due, &mut ctx);
                self.stats.timers_dispatched += 1;
                self.apply(control, ctx);
                if self.exit_requested {
                    break;
                }
            }
        }

        self.app.on_shutdown();
        log::info!(
            "runtime '{}' stopped: {} frames, {} timers",
            self.config.title,
            self.stats.frames,
            self.stats.timers_dispatched
        );
    }

    fn draw_frame(&mut self, now_ms: u64) {
        self.redraw_requested = false;

        let mut ctx = RuntimeCtx::default();
        let (control, presented) = {
            let mut frame = FrameCtx {
                surface: SurfaceCtx { size: self.config.surface_size },
                time: FrameTime { now_ms, frame_index: self.stats.frames },
                runtime: &mut ctx,
                presented: 0,
            };
            let control = self.app.on_frame(&mut frame);
            (control, frame.presented)
        };

        self.stats.frames += 1;
        self.stats.items_presented += presented as u64;
        self.apply(control, ctx);
    }
}
