use std::{collections::HashMap, fmt, hash::BuildHasher, str::FromStr};

use super::error::NavError;

/// Sections of the home page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Education,
    Technologies,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Hero,
        Self::About,
        Self::Education,
        Self::Technologies,
        Self::Projects,
        Self::Contact,
    ];

    /// The `id` attribute of the section's root element.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Education => "education",
            Self::Technologies => "technologies",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    /// Accepts the bare DOM id or an anchor (`#about`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|section| section.dom_id() == id)
            .ok_or_else(|| NavError::SectionNotFound(id.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub display_name: &'static str,
}

/// Ordered, non-empty set of navigation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, NavError> {
        if sections.is_empty() {
            return Err(NavError::EmptyRegistry);
        }
        Ok(Self { sections })
    }

    /// The section considered active before any scrolling happens.
    pub fn first(&self) -> SectionId {
        self.sections[0].id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| Section {
                id,
                display_name: match id {
                    SectionId::Hero => "Home",
                    SectionId::About => "About",
                    SectionId::Education => "Education",
                    SectionId::Technologies => "Technologies",
                    SectionId::Projects => "Projects",
                    SectionId::Contact => "Contact",
                },
            })
            .collect();
        Self { sections }
    }
}

/// Layout position of a section's root element, as `offsetTop` and
/// `offsetHeight` report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub offset_top: i32,
    pub offset_height: i32,
}

/// Source of section positions; the DOM in the browser.
pub trait SectionLayout {
    /// `None` when the section's element is not rendered.
    fn bounds(&self, id: SectionId) -> Option<SectionBounds>;
}

/// A fixed layout, e.g. measured once or laid out by hand.
impl<S: BuildHasher> SectionLayout for HashMap<SectionId, SectionBounds, S> {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = SectionRegistry::default();
        let ids = registry.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, SectionId::ALL.to_vec());
        assert_eq!(registry.first(), SectionId::Hero);
        assert_eq!(registry.iter().count(), 6);

        let names = registry.iter().map(|s| s.display_name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Home", "About", "Education", "Technologies", "Projects", "Contact"]
        );
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(SectionRegistry::new(vec![]), Err(NavError::EmptyRegistry));

        let registry = SectionRegistry::new(vec![Section {
            id: SectionId::Contact,
            display_name: "Contact",
        }])
        .expect("single section registry should be valid");
        assert_eq!(registry.first(), SectionId::Contact);
        assert!(!registry.contains(SectionId::Hero));
    }

    #[test]
    fn test_section_id_parsing() {
        for id in SectionId::ALL {
            assert_eq!(id.dom_id().parse::<SectionId>(), Ok(id));
            assert_eq!(format!("#{id}").parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(NavError::SectionNotFound("blog".to_string()))
        );
        // ids are case sensitive, like getElementById
        assert!("About".parse::<SectionId>().is_err());
    }
}
