//! Dial UI: analog clock face and chronometer widgets on top of `dial-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dial_ui::prelude::*;
//!
//! Application::new()
//!     .title("Chronometer")
//!     .image("dial", 200.0, 200.0)
//!     .image("big_hand", 12.0, 70.0)
//!     .image("small_hand", 8.0, 90.0)
//!     .run_widget(|res: &AppResources| {
//!         let face = ClockFace::new(ClockImages {
//!             dial: res.images.require("dial")?,
//!             big_hand: res.images.require("big_hand")?,
//!             small_hand: res.images.require("small_hand")?,
//!         });
//!         let mut chrono = AnalogChronometer::new(face, res.scheduler.clone(), res.clock.clone());
//!         chrono.start();
//!         Ok(chrono.into())
//!     })?;
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted.

pub mod angles;
pub mod app;
pub mod constraints;

// Top-level re-export for the common entry point: `use dial_ui::Application`
pub use app::Application;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI. Import this in your component files.
pub mod prelude {
    pub use crate::angles::{HandAngles, TimeValue, angles_from_hour_min_sec, angles_from_min_sec};
    pub use crate::constraints::Constraints;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        chronometer::{AnalogChronometer, ChronometerConfig},
        clock_face::{ClockFace, ClockImages},
    };

    // Re-export the engine primitives everyone needs.
    pub use dial_engine::coords::{Rect, Vec2};
    pub use dial_engine::image::{ImageAsset, ImageId};
    pub use dial_engine::time::{MonotonicClock, Scheduler};

    // Application (entry point for end-user apps)
    pub use crate::app::{AppResources, Application, ImageMap};
}
