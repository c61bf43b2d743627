//! Visual theme variants of the invitation page.
//!
//! DESIGN
//! ======
//! A theme only decides presentation: a palette exposed as CSS custom
//! properties, a font pairing, and which sections appear in what order. All
//! themes render the same components and content.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::content::SectionId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Night sky navy with gold accents.
    #[default]
    Celestial,
    /// Deep teal with sand gold accents.
    Lagoon,
    /// Warm ivory paper with sage accents.
    Ivory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub nav_background: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontPair {
    pub display: &'static str,
    pub body: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Celestial, Theme::Lagoon, Theme::Ivory];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Celestial => "celestial",
            Self::Lagoon => "lagoon",
            Self::Ivory => "ivory",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.slug().eq_ignore_ascii_case(slug))
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Celestial => "Celestial Night",
            Self::Lagoon => "Lagoon",
            Self::Ivory => "Ivory Garden",
        }
    }

    /// Route path for this theme.
    #[must_use]
    pub fn path(self) -> String {
        format!("/wedding/{}", self.slug())
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Celestial => Palette {
                background: "#05071a",
                surface: "rgba(26, 27, 51, 0.72)",
                text: "#F0F0F5",
                muted: "rgba(240, 240, 245, 0.72)",
                accent: "#E9C46A",
                nav_background: "rgba(26, 27, 51, 0.85)",
            },
            Self::Lagoon => Palette {
                background: "#03131c",
                surface: "rgba(4, 27, 39, 0.78)",
                text: "#e6f4f1",
                muted: "rgba(153, 246, 228, 0.7)",
                accent: "#d3b06a",
                nav_background: "rgba(4, 27, 39, 0.85)",
            },
            Self::Ivory => Palette {
                background: "#f7f3ea",
                surface: "rgba(255, 255, 255, 0.82)",
                text: "#2f2a24",
                muted: "rgba(47, 42, 36, 0.68)",
                accent: "#7c8f6a",
                nav_background: "rgba(255, 252, 245, 0.9)",
            },
        }
    }

    #[must_use]
    pub fn fonts(self) -> FontPair {
        match self {
            Self::Celestial => FontPair {
                display: "'Montserrat Alternates', sans-serif",
                body: "'Raleway', sans-serif",
            },
            Self::Lagoon => FontPair {
                display: "'Cormorant Garamond', serif",
                body: "'Nunito Sans', sans-serif",
            },
            Self::Ivory => FontPair {
                display: "'Playfair Display', serif",
                body: "'Lora', serif",
            },
        }
    }

    /// Sections rendered by this theme, in page order.
    #[must_use]
    pub fn sections(self) -> &'static [SectionId] {
        match self {
            Self::Celestial => &[
                SectionId::Invitation,
                SectionId::Couple,
                SectionId::Story,
                SectionId::Events,
                SectionId::Gallery,
                SectionId::Wishes,
            ],
            Self::Lagoon => &[
                SectionId::Invitation,
                SectionId::Couple,
                SectionId::Events,
                SectionId::Gallery,
                SectionId::Wishes,
            ],
            Self::Ivory => &[
                SectionId::Invitation,
                SectionId::Couple,
                SectionId::Story,
                SectionId::Events,
                SectionId::Wishes,
            ],
        }
    }

    #[must_use]
    pub fn has_section(self, section: SectionId) -> bool {
        self.sections().contains(&section)
    }

    /// Inline `style` value declaring the palette and fonts as custom
    /// properties on the page root.
    #[must_use]
    pub fn css_vars(self) -> String {
        let p = self.palette();
        let f = self.fonts();
        format!(
            "--inv-bg:{};--inv-surface:{};--inv-text:{};--inv-muted:{};--inv-accent:{};--inv-nav-bg:{};--font-display:{};--font-body:{};",
            p.background, p.surface, p.text, p.muted, p.accent, p.nav_background, f.display, f.body
        )
    }
}
