/// Share of a section that must be on screen before it counts as visible.
pub const THRESHOLD: f64 = 0.1;
/// Grows the viewport so sections trigger slightly before they scroll in.
pub const ROOT_MARGIN: &str = "50px";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const NAV: [Section; 5] = [
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    /// Element id and anchor of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionChange {
    pub section: Section,
    pub intersecting: bool,
}

/// Whether each section currently intersects the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlags([bool; 6]);

impl VisibilityFlags {
    pub fn is_visible(&self, section: Section) -> bool {
        self.0[section.index()]
    }

    /// Returns whether the flag changed.
    pub fn set(&mut self, section: Section, visible: bool) -> bool {
        let slot = &mut self.0[section.index()];
        let changed = *slot != visible;
        *slot = visible;
        changed
    }

    pub fn apply(&mut self, change: IntersectionChange) -> bool {
        self.set(change.section, change.intersecting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_start_hidden() {
        let flags = VisibilityFlags::default();
        for section in Section::ALL {
            assert!(!flags.is_visible(section), "{section:?}");
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("footer"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn test_set_leaves_other_sections_untouched() {
        let mut flags = VisibilityFlags::default();
        assert!(flags.set(Section::Skills, true));
        for section in Section::ALL {
            assert_eq!(flags.is_visible(section), section == Section::Skills);
        }
    }

    #[test]
    fn test_repeated_set_is_noop() {
        let mut flags = VisibilityFlags::default();
        assert!(flags.apply(IntersectionChange {
            section: Section::About,
            intersecting: true,
        }));
        let before = flags;
        assert!(!flags.set(Section::About, true));
        assert_eq!(flags, before);
        assert!(!flags.set(Section::Contact, false));
    }

    #[test]
    fn test_nav_excludes_hero() {
        assert!(!Section::NAV.contains(&Section::Hero));
        assert_eq!(Section::Projects.anchor(), "#projects");
    }
}
