use dial_engine::time::{TimerHandle, TimerToken};

/// Host events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The hosting surface was shown (`true`) or hidden (`false`).
    Visibility { visible: bool },
    /// The widget was removed from its host. No further frames will be drawn.
    Detached,
    /// A one-shot timer armed on the shared scheduler has fired.
    ///
    /// Widgets claim the timers they armed by comparing `handle`.
    Timer { handle: TimerHandle, token: TimerToken },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
