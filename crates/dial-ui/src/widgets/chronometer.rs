use std::rc::Rc;

use dial_engine::coords::{Rect, Vec2};
use dial_engine::time::{MonotonicClock, Scheduler, TimerHandle, TimerToken};

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::clock_face::ClockFace;

/// Token carried by every tick a chronometer arms.
pub const TICK_TOKEN: TimerToken = TimerToken(1);

/// Observer called once per tick with the chronometer that ticked.
pub type TickListener = Box<dyn FnMut(&mut AnalogChronometer)>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChronometerConfig {
    /// Delay between two ticks while running.
    pub tick_interval_ms: u64,
}

impl Default for ChronometerConfig {
    fn default() -> Self {
        Self { tick_interval_ms: 1_000 }
    }
}

/// A [`ClockFace`] driven as a stopwatch.
///
/// Shows `now - base` on the face in minute/second mode. Ticks only while
/// both started and visible; each tick updates the hands, calls the tick
/// listener and arms the next one-shot timer on the shared scheduler.
///
/// The host is expected to deliver fired timers back through
/// [`on_timer`](Self::on_timer) or [`UiEvent::Timer`].
pub struct AnalogChronometer {
    face: ClockFace,
    scheduler: Rc<dyn Scheduler>,
    clock: Rc<dyn MonotonicClock>,
    config: ChronometerConfig,

    base: u64,
    started: bool,
    visible: bool,
    /// `started && visible`, as of the last transition.
    running: bool,
    pending: Option<TimerHandle>,

    listener: Option<TickListener>,
    /// Bumped on every listener change, so a listener that replaced itself
    /// mid-call is not put back.
    listener_epoch: u64,
}

impl AnalogChronometer {
    pub fn new(face: ClockFace, scheduler: Rc<dyn Scheduler>, clock: Rc<dyn MonotonicClock>) -> Self {
        Self::with_config(face, scheduler, clock, ChronometerConfig::default())
    }

    pub fn with_config(
        face: ClockFace,
        scheduler: Rc<dyn Scheduler>,
        clock: Rc<dyn MonotonicClock>,
        config: ChronometerConfig,
    ) -> Self {
        let base = clock.now_ms();
        let mut chrono = Self {
            face,
            scheduler,
            clock,
            config,
            base,
            started: false,
            visible: true,
            running: false,
            pending: None,
            listener: None,
            listener_epoch: 0,
        };
        chrono.update_time(base);
        chrono
    }

    /// Builder form of [`set_tick_listener`](Self::set_tick_listener).
    pub fn on_tick(mut self, listener: impl FnMut(&mut AnalogChronometer) + 'static) -> Self {
        self.set_tick_listener(Some(Box::new(listener)));
        self
    }

    // ── base ──────────────────────────────────────────────────────────────

    /// Sets the clock reading elapsed time is measured from.
    ///
    /// Notifies the listener, then refreshes the face, whether or not the
    /// chronometer is running.
    pub fn set_base(&mut self, base: u64) {
        log::debug!("chronometer base set to t={base}ms");
        self.base = base;
        self.notify();
        let now = self.clock.now_ms();
        self.update_time(now);
    }

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Milliseconds since the base, `0` if the base lies in the future.
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.now_ms().saturating_sub(self.base)
    }

    // ── start / stop ──────────────────────────────────────────────────────

    /// Starts counting. Does not touch the base.
    pub fn start(&mut self) {
        self.started = true;
        self.update_running();
    }

    /// Stops counting. Does not touch the base.
    pub fn stop(&mut self) {
        self.started = false;
        self.update_running();
    }

    // ── listener ──────────────────────────────────────────────────────────

    /// Replaces the tick listener. `None` clears it.
    ///
    /// The listener is out of its slot while it runs: ticks or `set_base`
    /// calls made from inside it do not call it again.
    pub fn set_tick_listener(&mut self, listener: Option<TickListener>) {
        self.listener = listener;
        self.listener_epoch = self.listener_epoch.wrapping_add(1);
    }

    #[inline]
    pub fn has_tick_listener(&self) -> bool {
        self.listener.is_some()
    }

    // ── host lifecycle ────────────────────────────────────────────────────

    /// The hosting surface was shown or hidden.
    pub fn on_visibility_changed(&mut self, visible: bool) {
        self.visible = visible;
        self.update_running();
    }

    /// The widget was removed from its host.
    pub fn on_detached(&mut self) {
        self.on_visibility_changed(false);
    }

    /// Delivers a fired timer. Returns `false` if `handle` is not the tick this
    /// chronometer is waiting for.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        if self.running {
            let now = self.clock.now_ms();
            self.tick(now);
            self.arm_if_running();
        }
        true
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The armed tick, if any.
    #[inline]
    pub fn pending_tick(&self) -> Option<TimerHandle> {
        self.pending
    }

    #[inline]
    pub fn clock_face(&self) -> &ClockFace {
        &self.face
    }

    #[inline]
    pub fn config(&self) -> ChronometerConfig {
        self.config
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn update_running(&mut self) {
        let running = self.started && self.visible;
        if running == self.running {
            return;
        }
        // Set first: the listener may call back into start/stop.
        self.running = running;
        if running {
            log::debug!("chronometer running (base t={}ms)", self.base);
            let now = self.clock.now_ms();
            self.tick(now);
            self.arm_if_running();
        } else {
            log::debug!("chronometer stopped");
            self.cancel_pending();
        }
    }

    fn tick(&mut self, now_ms: u64) {
        self.update_time(now_ms);
        self.notify();
    }

    fn update_time(&mut self, now_ms: u64) {
        let total_seconds = now_ms.saturating_sub(self.base) / 1_000;
        let seconds = (total_seconds % 60) as u32;
        let minutes = ((total_seconds / 60) % 60) as u32;
        log::trace!("chronometer at {minutes:02}:{seconds:02}");
        self.face.set_min_sec(minutes, seconds);
    }

    fn notify(&mut self) {
        let epoch = self.listener_epoch;
        if let Some(mut listener) = self.listener.take() {
            listener(self);
            if self.listener_epoch == epoch {
                self.listener = Some(listener);
            }
        }
    }

    fn arm_if_running(&mut self) {
        if self.running && self.pending.is_none() {
            let handle = self.scheduler.schedule_after(self.config.tick_interval_ms, TICK_TOKEN);
            log::trace!("chronometer armed {handle:?}");
            self.pending = Some(handle);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl Drop for AnalogChronometer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl Widget for AnalogChronometer {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.face.measure(constraints)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.face.paint(painter, rect);
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
        match *event {
            UiEvent::Visibility { visible } => {
                self.on_visibility_changed(visible);
                EventResult::Ignored
            }
            UiEvent::Detached => {
                self.on_detached();
                EventResult::Ignored
            }
            UiEvent::Timer { handle, .. } => {
                if self.on_timer(handle) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
        }
    }
}
