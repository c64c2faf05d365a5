use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};

use dial_engine::coords::Vec2;
use dial_engine::core::{App as EngineApp, AppControl, FrameCtx};
use dial_engine::image::{ImageAsset, ImageRegistry};
use dial_engine::runtime::{RunStats, Runtime, RuntimeConfig, RuntimeCtx};
use dial_engine::time::{DueTimer, MonotonicClock, SystemClock, TimerQueue};

use crate::event::UiEvent;
use crate::scene::UiScene;
use crate::widget::Element;

// ── ImageMap ──────────────────────────────────────────────────────────────

/// A name-keyed map of registered image handles.
///
/// Passed to the builder closure in [`Application::run_widget`] (through
/// [`AppResources`]) so the application can look images up by the name it
/// registered them under.
pub struct ImageMap(pub(crate) HashMap<String, ImageAsset>);

impl ImageMap {
    /// Returns the image registered under `name`, or `None`.
    pub fn get(&self, name: &str) -> Option<ImageAsset> {
        self.0.get(name).copied()
    }

    /// Like [`get`](Self::get), but a missing name is an error.
    pub fn require(&self, name: &str) -> Result<ImageAsset> {
        self.get(name).ok_or_else(|| anyhow!("image '{name}' was not registered"))
    }
}

// ── AppResources ──────────────────────────────────────────────────────────

/// Everything a root widget may need from the host, handed to the builder
/// closure once before the loop starts.
pub struct AppResources {
    pub images: ImageMap,
    /// The loop's timer queue. Widgets hold it as an `Rc<dyn Scheduler>`.
    pub scheduler: Rc<TimerQueue>,
    pub clock: Rc<dyn MonotonicClock>,
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// Configure the surface and images, then start the loop with
/// [`run_widget`](Self::run_widget).
///
/// ```rust,ignore
/// Application::new()
///     .title("Chronometer")
///     .size(240.0, 240.0)
///     .image("dial", 200.0, 200.0)
///     .run_for_ms(10_000)
///     .run_widget(|res| Ok(MyWidget::new(res.images.require("dial")?).into()))?;
/// ```
pub struct Application {
    title:      String,
    width:      f32,
    height:     f32,
    run_for_ms: Option<u64>,
    images:     Vec<(String, f32, f32)>,
    clock:      Option<Rc<dyn MonotonicClock>>,
}

impl Application {
    pub fn new() -> Self {
        let defaults = RuntimeConfig::default();
        Self {
            title:      defaults.title,
            width:      defaults.surface_size.x,
            height:     defaults.surface_size.y,
            run_for_ms: defaults.run_for_ms,
            images:     Vec::new(),
            clock:      None,
        }
    }

    /// Set the surface title (used in logs).
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the surface size in logical pixels.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Stop the loop after `ms` milliseconds of clock time.
    pub fn run_for_ms(mut self, ms: u64) -> Self {
        self.run_for_ms = Some(ms);
        self
    }

    /// Register a named image with its intrinsic size. Retrieve it with
    /// [`ImageMap::get`] or [`ImageMap::require`].
    pub fn image(mut self, name: impl Into<String>, width: f32, height: f32) -> Self {
        self.images.push((name.into(), width, height));
        self
    }

    /// Drive the loop from `clock` instead of the system clock.
    pub fn clock(mut self, clock: Rc<dyn MonotonicClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Start the loop with a custom root widget.
    ///
    /// `build` is called once after images are registered; the returned
    /// [`Element`] persists across frames and receives host events through
    /// `on_event`. Returns once the run time elapsed, the app exited or no
    /// timer is left.
    pub fn run_widget<F>(self, build: F) -> Result<RunStats>
    where
        F: FnOnce(&AppResources) -> Result<Element>,
    {
        let clock: Rc<dyn MonotonicClock> = match self.clock {
            Some(clock) => clock,
            None => Rc::new(SystemClock::new()),
        };
        let timers = Rc::new(TimerQueue::new(clock.clone()));

        let mut registry = ImageRegistry::new();
        let mut images = HashMap::new();
        for (name, width, height) in self.images {
            let asset = registry
                .register(name.as_str(), width, height)
                .with_context(|| format!("failed to register image '{name}'"))?;
            images.insert(name, asset);
        }

        let resources = AppResources {
            images: ImageMap(images),
            scheduler: timers.clone(),
            clock,
        };
        let root = build(&resources).context("failed to build root widget")?;

        let config = RuntimeConfig {
            title:        self.title,
            surface_size: Vec2::new(self.width, self.height),
            run_for_ms:   self.run_for_ms,
        };
        let state = UiAppState { ui_scene: UiScene::new(), root };
        Runtime::run(config, timers, state).context("dial runtime error")
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `dial_engine::core::App`.
///
/// Translates loop callbacks into `UiEvent`s for the root and paints it
/// whenever a frame is due. User code never sees this type.
struct UiAppState {
    ui_scene: UiScene,
    root:     Element,
}

impl UiAppState {
    fn dispatch(&mut self, event: &UiEvent) -> bool {
        // Lifecycle and timer events do not depend on the surface size.
        self.ui_scene.dispatch(&mut self.root, event, Vec2::zero()).is_consumed()
    }
}

impl EngineApp for UiAppState {
    fn on_start(&mut self, runtime: &mut RuntimeCtx) -> AppControl {
        self.dispatch(&UiEvent::Visibility { visible: true });
        runtime.request_redraw();
        AppControl::Continue
    }

    fn on_timer(&mut self, timer: DueTimer, runtime: &mut RuntimeCtx) -> AppControl {
        let event = UiEvent::Timer { handle: timer.handle, token: timer.token };
        if self.dispatch(&event) {
            runtime.request_redraw();
        } else {
            log::warn!("timer {:?} ({:?}) was not claimed by any widget", timer.handle, timer.token);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let viewport = ctx.surface.size;
        let draw_list = self.ui_scene.frame(&self.root, viewport);
        ctx.present(draw_list);
        AppControl::Continue
    }

    fn on_shutdown(&mut self) {
        self.dispatch(&UiEvent::Detached);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use dial_engine::time::ManualClock;

    use crate::widgets::chronometer::AnalogChronometer;
    use crate::widgets::clock_face::{ClockFace, ClockImages};

    fn studio() -> Application {
        Application::new()
            .title("test")
            .size(240.0, 240.0)
            .image("dial", 200.0, 200.0)
            .image("big_hand", 10.0, 60.0)
            .image("small_hand", 6.0, 90.0)
    }

    fn face(res: &AppResources) -> Result<ClockFace> {
        Ok(ClockFace::new(ClockImages {
            dial: res.images.require("dial")?,
            big_hand: res.images.require("big_hand")?,
            small_hand: res.images.require("small_hand")?,
        }))
    }

    // ── chronometer end to end ────────────────────────────────────────────

    #[test]
    fn chronometer_ticks_redraw_each_second() {
        let clock = Rc::new(ManualClock::new(0));
        let ticks = Rc::new(Cell::new(0u32));
        let queue: Rc<RefCell<Option<Rc<TimerQueue>>>> = Rc::new(RefCell::new(None));

        let sink = ticks.clone();
        let queue_slot = queue.clone();
        let stats = studio()
            .clock(clock.clone())
            .run_for_ms(3_500)
            .run_widget(move |res| {
                *queue_slot.borrow_mut() = Some(res.scheduler.clone());
                let mut chrono = AnalogChronometer::new(face(res)?, res.scheduler.clone(), res.clock.clone())
                    .on_tick(move |_| sink.set(sink.get() + 1));
                chrono.start();
                Ok(chrono.into())
            })
            .unwrap();

        // immediate tick on start, then at 1s, 2s and 3s
        assert_eq!(ticks.get(), 4);
        assert_eq!(stats.timers_dispatched, 3);
        assert_eq!(stats.frames, 4);
        assert_eq!(stats.items_presented, 12);
        assert_eq!(clock.now_ms(), 3_500);

        let queue = queue.borrow().clone().unwrap();
        assert_eq!(queue.pending_count(), 0);
    }

    // ── setup errors ──────────────────────────────────────────────────────

    #[test]
    fn missing_image_fails_the_build() {
        let err = Application::new()
            .clock(Rc::new(ManualClock::new(0)))
            .run_widget(|res| Ok(ClockFace::new(ClockImages {
                dial: res.images.require("dial")?,
                big_hand: res.images.require("dial")?,
                small_hand: res.images.require("dial")?,
            }).into()))
            .unwrap_err();
        assert!(format!("{err:#}").contains("image 'dial' was not registered"));
    }

    #[test]
    fn invalid_image_size_is_reported() {
        let err = Application::new()
            .clock(Rc::new(ManualClock::new(0)))
            .image("dial", 0.0, 200.0)
            .run_widget(|_| unreachable!())
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to register image 'dial'"));
    }

    #[test]
    fn static_face_draws_one_frame() {
        let stats = studio()
            .clock(Rc::new(ManualClock::new(0)))
            .run_widget(|res| Ok(face(res)?.time(10, 10, 30).into()))
            .unwrap();
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.items_presented, 3);
    }

    #[test]
    fn image_map_lookup() {
        let mut reg = ImageRegistry::new();
        let dial = reg.register("dial", 1.0, 1.0).unwrap();
        let map = ImageMap(HashMap::from([("dial".to_string(), dial)]));
        assert_eq!(map.get("dial"), Some(dial));
        assert_eq!(map.get("hand"), None);
        assert!(map.require("hand").is_err());
    }
}
