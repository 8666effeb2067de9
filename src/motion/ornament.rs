//! Static layout of the decorative elements: emblem faces, the particle ring
//! around the emblem and the background particle field.

use std::f64::consts::FRAC_PI_4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub name: &'static str,
    pub transform: &'static str,
    /// Tailwind gradient and border classes.
    pub classes: &'static str,
    pub glow: &'static str,
    pub glyph: &'static str,
    pub glyph_class: &'static str,
}

pub static FACES: [Face; 6] = [
    Face {
        name: "front",
        transform: "translateZ(20px)",
        classes: "from-blue-500 to-purple-600 border-blue-400/50",
        glow: "0 0 20px rgba(59, 130, 246, 0.5)",
        glyph: "A",
        glyph_class: "text-3xl",
    },
    Face {
        name: "back",
        transform: "translateZ(-20px) rotateY(180deg)",
        classes: "from-purple-600 to-pink-500 border-purple-400/50",
        glow: "0 0 20px rgba(147, 51, 234, 0.5)",
        glyph: "K",
        glyph_class: "text-3xl",
    },
    Face {
        name: "right",
        transform: "rotateY(90deg) translateZ(20px)",
        classes: "from-cyan-500 to-blue-500 border-cyan-400/50",
        glow: "0 0 20px rgba(6, 182, 212, 0.5)",
        glyph: "</>",
        glyph_class: "text-2xl",
    },
    Face {
        name: "left",
        transform: "rotateY(-90deg) translateZ(20px)",
        classes: "from-emerald-500 to-cyan-500 border-emerald-400/50",
        glow: "0 0 20px rgba(16, 185, 129, 0.5)",
        glyph: "{ }",
        glyph_class: "text-2xl",
    },
    Face {
        name: "top",
        transform: "rotateX(90deg) translateZ(20px)",
        classes: "from-yellow-500 to-orange-500 border-yellow-400/50",
        glow: "0 0 20px rgba(245, 158, 11, 0.5)",
        glyph: "⚡",
        glyph_class: "text-2xl",
    },
    Face {
        name: "bottom",
        transform: "rotateX(-90deg) translateZ(20px)",
        classes: "from-red-500 to-pink-500 border-red-400/50",
        glow: "0 0 20px rgba(239, 68, 68, 0.5)",
        glyph: "🚀",
        glyph_class: "text-2xl",
    },
];

pub const ORBIT_COUNT: usize = 8;
const ORBIT_RADIUS_PCT: f64 = 60.0;

/// Positioned, timed decoration. Positions are percentages of the parent box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// Ring of particles around the emblem, 45 degrees apart.
pub fn orbit() -> [Particle; ORBIT_COUNT] {
    std::array::from_fn(|i| {
        let angle = i as f64 * FRAC_PI_4;
        Particle {
            left_pct: 50.0 + angle.cos() * ORBIT_RADIUS_PCT,
            top_pct: 50.0 + angle.sin() * ORBIT_RADIUS_PCT,
            delay_s: i as f64 * 0.2,
            duration_s: 2.0 + (i % 3) as f64,
        }
    })
}

pub fn orbit_animation(hovered: bool) -> &'static str {
    if hovered {
        "animate-bounce"
    } else {
        "animate-pulse"
    }
}

/// Glow layer behind the emblem swells and brightens on hover.
pub fn glow_classes(hovered: bool) -> &'static str {
    if hovered {
        "opacity-100 scale-150"
    } else {
        "opacity-40 scale-100"
    }
}

pub const FIELD_COUNT: usize = 20;

/// Maps `seed` to [0, 1) with a splitmix32 style mixer.
fn unit(seed: u32) -> f64 {
    let mut z = seed.wrapping_add(0x9e37_79b9);
    z = (z ^ (z >> 16)).wrapping_mul(0x85eb_ca6b);
    z = (z ^ (z >> 13)).wrapping_mul(0xc2b2_ae35);
    z ^= z >> 16;
    f64::from(z) / (f64::from(u32::MAX) + 1.0)
}

/// Background particle field. Scattered, but the same on every render so
/// server output and hydration agree.
pub fn field() -> [Particle; FIELD_COUNT] {
    std::array::from_fn(|i| {
        let seed = i as u32 * 4;
        Particle {
            left_pct: unit(seed) * 100.0,
            top_pct: unit(seed + 1) * 100.0,
            delay_s: unit(seed + 2) * 3.0,
            duration_s: 2.0 + unit(seed + 3) * 2.0,
        }
    })
}

/// Blurred colour blobs on the parallax layer.
pub static BLOBS: [&str; 3] = [
    "top-20 left-20 w-64 h-64 from-purple-500 to-pink-500",
    "top-40 right-20 w-48 h-48 from-blue-500 to-cyan-500",
    "bottom-20 left-1/3 w-56 h-56 from-green-500 to-emerald-500",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_form_a_cube() {
        let names = FACES.map(|f| f.name);
        assert_eq!(names, ["front", "back", "right", "left", "top", "bottom"]);
        for face in FACES.iter() {
            assert!(face.transform.contains("translateZ("), "{}", face.name);
        }
    }

    #[test]
    fn test_orbit_ring() {
        let ring = orbit();
        // first particle sits due right of centre
        assert!((ring[0].left_pct - 110.0).abs() < 1e-9);
        assert!((ring[0].top_pct - 50.0).abs() < 1e-9);
        // and the third due below
        assert!((ring[2].left_pct - 50.0).abs() < 1e-9);
        assert!((ring[2].top_pct - 110.0).abs() < 1e-9);
        assert_eq!(ring.map(|p| p.duration_s)[..4], [2.0, 3.0, 4.0, 2.0]);
        assert!((ring[7].delay_s - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_field_is_stable_and_in_range() {
        let a = field();
        assert_eq!(a, field());
        for p in a.iter() {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..3.0).contains(&p.delay_s));
            assert!((2.0..4.0).contains(&p.duration_s));
        }
        assert_ne!(a[0], a[1]);
    }

    #[test]
    fn test_orbit_animation_switches_on_hover() {
        assert_eq!(orbit_animation(false), "animate-pulse");
        assert_eq!(orbit_animation(true), "animate-bounce");
        assert_ne!(glow_classes(false), glow_classes(true));
    }
}
