//! Entrance animation state.
//!
//! Every class here is a pure function of a section's visibility flag, so a
//! section scrolled out and back in replays its entrance.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Slides up from below.
    Rise,
    FromLeft,
    FromRight,
    /// Slides in from a full width to the right.
    SlideIn,
}

impl Entrance {
    pub fn classes(self, visible: bool) -> &'static str {
        match (self, visible) {
            (Self::Rise, true) => "translate-y-0 opacity-100",
            (Self::Rise, false) => "translate-y-20 opacity-0",
            (Self::FromLeft | Self::FromRight | Self::SlideIn, true) => {
                "translate-x-0 opacity-100"
            }
            (Self::FromLeft, false) => "-translate-x-20 opacity-0",
            (Self::FromRight, false) => "translate-x-20 opacity-0",
            (Self::SlideIn, false) => "translate-x-full opacity-0",
        }
    }
}

pub fn skill_delay_ms(index: usize) -> u32 {
    (index as u32 * 150).min(1000)
}

/// Stagger for project cards and timeline entries.
pub fn card_delay_ms(index: usize) -> u32 {
    (index as u32 + 1) * 200
}

pub fn fill_width(level: u8, visible: bool) -> String {
    if visible {
        format!("{}%", level.min(100))
    } else {
        "0%".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_on_every_toggle() {
        for entrance in [
            Entrance::Rise,
            Entrance::FromLeft,
            Entrance::FromRight,
            Entrance::SlideIn,
        ] {
            let seen = [false, true, false, true]
                .map(|visible| entrance.classes(visible));
            assert_eq!(seen[0], seen[2]);
            assert_eq!(seen[1], seen[3]);
            assert_ne!(seen[0], seen[1]);
            assert!(seen[0].contains("opacity-0"));
            assert!(seen[1].contains("opacity-100"));
        }
    }

    #[test]
    fn test_fill_width_follows_visibility() {
        assert_eq!(fill_width(75, true), "75%");
        assert_eq!(fill_width(75, false), "0%");
        assert_eq!(fill_width(100, true), "100%");
    }

    #[test]
    fn test_delays() {
        assert_eq!(skill_delay_ms(0), 0);
        assert_eq!(skill_delay_ms(3), 450);
        assert_eq!(skill_delay_ms(7), 1000);
        assert_eq!(skill_delay_ms(20), 1000);
        assert_eq!(card_delay_ms(0), 200);
        assert_eq!(card_delay_ms(3), 800);
    }
}
