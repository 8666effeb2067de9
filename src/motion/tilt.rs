//! Emblem orientation.
//!
//! The emblem turns toward the pointer: the offset of the pointer from the
//! emblem's centre, scaled down by [`DAMPING`], becomes the rotation about
//! each axis, clamped to [`MAX_DEG`].

use super::Pointer;

pub const MAX_DEG: f64 = 45.0;
pub const DAMPING: f64 = 10.0;
pub const PERSPECTIVE_PX: u32 = 1000;
pub const HOVER_SCALE: f64 = 1.1;
pub const HOVER_LIFT_PX: u32 = 20;

/// Viewport-relative box of an element, as from `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

fn clamp_deg(deg: f64) -> f64 {
    // + 0.0 folds -0.0 into 0.0
    deg.clamp(-MAX_DEG, MAX_DEG) + 0.0
}

impl Tilt {
    pub fn toward(pointer: Pointer, bounds: Bounds) -> Self {
        let (cx, cy) = bounds.center();
        let dx = (pointer.x - cx) / DAMPING;
        let dy = (pointer.y - cy) / DAMPING;
        Self {
            rotate_x: clamp_deg(dy),
            rotate_y: clamp_deg(-dx),
        }
    }

    pub fn transform(&self, hovered: bool) -> String {
        let (scale, lift) = if hovered {
            (HOVER_SCALE, HOVER_LIFT_PX)
        } else {
            (1.0, 0)
        };
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({scale}) translateZ({lift}px)",
            self.rotate_x, self.rotate_y
        )
    }
}
