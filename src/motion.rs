//! Interaction core of the page.
//!
//! Nothing in here touches Leptos. Pointer debouncing, scroll coalescing and
//! section visibility are plain state machines driven through a [`Scheduler`],
//! so they run the same against the browser ([`browser`]) and against the
//! manual clock used in tests.

pub mod browser;
mod controller;
mod debounce;
mod frame;
pub mod ornament;
pub mod reveal;
mod scheduler;
pub mod tilt;
mod visibility;

pub use controller::{parallax_transform, MotionSinks, PageMotion, PARALLAX_FACTOR, POINTER_DEBOUNCE};
pub use debounce::Debouncer;
pub use frame::FrameGate;
pub use scheduler::{Cancel, Scheduler};
pub use visibility::{IntersectionChange, Section, VisibilityFlags, ROOT_MARGIN, THRESHOLD};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser refused to schedule a {0}")]
    Schedule(&'static str),
    #[error("couldn't create intersection observer")]
    Observer,
}

/// Pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Background spotlight following the pointer.
    pub fn spotlight(&self) -> String {
        format!(
            "radial-gradient(circle at {:.0}px {:.0}px, rgba(59, 130, 246, 0.3) 0%, transparent 50%)",
            self.x, self.y
        )
    }
}
