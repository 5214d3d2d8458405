//! Page section catalog

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Maximum number of sections a Basic plan may select (2 mandatory + 4 optional)
pub const BASIC_SECTION_CAP: usize = 6;

/// Number of optional slots left once the mandatory sections are placed
pub const BASIC_OPTIONAL_SLOTS: usize = BASIC_SECTION_CAP - MANDATORY_UNDER_BASIC.len();

/// Sections forced into the selection whenever the Basic plan is chosen
pub const MANDATORY_UNDER_BASIC: [Section; 2] = [Section::Hero, Section::Contact];

/// A selectable page section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Hero,
    About,
    Services,
    Gallery,
    Pricing,
    Contact,
    Blog,
    Testimonials,
    Footer,
    #[serde(rename = "FAQ")]
    Faq,
}

impl Section {
    /// The catalog, in display order
    pub const ALL: [Section; 10] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Gallery,
        Section::Pricing,
        Section::Contact,
        Section::Blog,
        Section::Testimonials,
        Section::Footer,
        Section::Faq,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::About => "About",
            Self::Services => "Services",
            Self::Gallery => "Gallery",
            Self::Pricing => "Pricing",
            Self::Contact => "Contact",
            Self::Blog => "Blog",
            Self::Testimonials => "Testimonials",
            Self::Footer => "Footer",
            Self::Faq => "FAQ",
        }
    }

    /// Whether this section is forced on under the Basic plan
    pub fn is_mandatory_under_basic(&self) -> bool {
        MANDATORY_UNDER_BASIC.contains(self)
    }

    /// Position of this section in the catalog
    #[allow(dead_code)]
    pub fn catalog_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a section name is not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_unique_sections() {
        let mut names: Vec<&str> = Section::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = Section::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "Hero",
                "About",
                "Services",
                "Gallery",
                "Pricing",
                "Contact",
                "Blog",
                "Testimonials",
                "Footer",
                "FAQ"
            ]
        );
    }

    #[test]
    fn test_mandatory_sections() {
        assert!(Section::Hero.is_mandatory_under_basic());
        assert!(Section::Contact.is_mandatory_under_basic());
        let mandatory = Section::ALL
            .iter()
            .filter(|s| s.is_mandatory_under_basic())
            .count();
        assert_eq!(mandatory, 2);
    }

    #[test]
    fn test_optional_slots() {
        assert_eq!(BASIC_OPTIONAL_SLOTS, 4);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("Hero".parse::<Section>(), Ok(Section::Hero));
        assert_eq!("FAQ".parse::<Section>(), Ok(Section::Faq));
        assert_eq!("Testimonials".parse::<Section>(), Ok(Section::Testimonials));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "Newsletter".parse::<Section>().unwrap_err();
        assert_eq!(err, UnknownSection("Newsletter".to_string()));
        assert_eq!(err.to_string(), "unknown page section: Newsletter");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("hero".parse::<Section>().is_err());
        assert!("Faq".parse::<Section>().is_err());
    }

    #[test]
    fn test_catalog_index() {
        assert_eq!(Section::Hero.catalog_index(), 0);
        assert_eq!(Section::Contact.catalog_index(), 5);
        assert_eq!(Section::Faq.catalog_index(), 9);
    }

    #[test]
    fn test_display_uses_catalog_name() {
        assert_eq!(Section::Faq.to_string(), "FAQ");
        assert_eq!(format!("{}", Section::Gallery), "Gallery");
    }
}
