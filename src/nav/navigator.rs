use super::{
    config::NavConfig,
    error::NavError,
    menu::MenuEvent,
    route::Route,
    section::{SectionId, SectionLayout, SectionRegistry},
};

/// A smooth scroll to an absolute vertical offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: i32,
}

impl ScrollRequest {
    pub const TOP_OF_PAGE: ScrollRequest = ScrollRequest { top: 0 };
}

/// The delayed half of a section navigation: the scroll to issue and the
/// menu transition applied right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationStep {
    pub scroll: ScrollRequest,
    /// Always [`MenuEvent::Navigated`], whether or not the menu is open.
    pub menu: MenuEvent,
}

/// Turns "go to section X" into a scroll request.
///
/// Navigation happens in two steps: [`SectionNavigator::resolve`] runs when
/// the link is clicked and [`SectionNavigator::request`] runs once the
/// navigation delay has passed, so offsets are read from the settled layout.
/// The step it returns closes the menu once the scroll has been issued.
pub struct SectionNavigator {
    config: NavConfig,
    registry: SectionRegistry,
}

impl SectionNavigator {
    pub fn new(config: NavConfig, registry: SectionRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Checks that `target` names a rendered section.
    ///
    /// Returns `Ok(None)` off the home route: anchors only exist there, so
    /// navigation is skipped rather than attempted across routes.
    pub fn resolve(
        &self,
        route: Route,
        target: &str,
        layout: &impl SectionLayout,
    ) -> Result<Option<SectionId>, NavError> {
        if !route.has_sections() {
            return Ok(None);
        }
        let id = target.parse::<SectionId>()?;
        if !self.registry.contains(id) || layout.bounds(id).is_none() {
            return Err(NavError::SectionNotFound(id.to_string()));
        }
        Ok(Some(id))
    }

    /// Scroll placing `id` just below the fixed header, then the menu close.
    pub fn request(
        &self,
        id: SectionId,
        viewport_width: u32,
        layout: &impl SectionLayout,
    ) -> Result<NavigationStep, NavError> {
        let bounds = layout
            .bounds(id)
            .ok_or_else(|| NavError::SectionNotFound(id.to_string()))?;
        let header = self.config.header_offset_for(viewport_width) as i32;
        Ok(NavigationStep {
            scroll: ScrollRequest {
                top: bounds.offset_top - header,
            },
            menu: MenuEvent::Navigated,
        })
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new(NavConfig::default(), SectionRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::nav::{MenuState, Section, SectionBounds};

    /// Both steps at once, skipping the delay.
    fn navigate(
        navigator: &SectionNavigator,
        route: Route,
        target: &str,
        viewport_width: u32,
        layout: &impl SectionLayout,
    ) -> Result<Option<ScrollRequest>, NavError> {
        match navigator.resolve(route, target, layout)? {
            Some(id) => navigator
                .request(id, viewport_width, layout)
                .map(|step| Some(step.scroll)),
            None => Ok(None),
        }
    }

    fn layout() -> HashMap<SectionId, SectionBounds> {
        HashMap::from([
            (
                SectionId::Hero,
                SectionBounds {
                    offset_top: 0,
                    offset_height: 900,
                },
            ),
            (
                SectionId::About,
                SectionBounds {
                    offset_top: 900,
                    offset_height: 1200,
                },
            ),
        ])
    }

    #[test]
    fn test_desktop_header_offset() {
        let navigator = SectionNavigator::default();
        let req = navigate(&navigator, Route::Home, "about", 1280, &layout())
            .expect("about should resolve");
        assert_eq!(req, Some(ScrollRequest { top: 820 }));
    }

    #[test]
    fn test_compact_header_offset() {
        let navigator = SectionNavigator::default();
        let req = navigate(&navigator, Route::Home, "about", 375, &layout())
            .expect("about should resolve");
        assert_eq!(req, Some(ScrollRequest { top: 830 }));

        // mobile layout but above the compact breakpoint
        let req = navigate(&navigator, Route::Home, "#about", 700, &layout())
            .expect("about should resolve");
        assert_eq!(req, Some(ScrollRequest { top: 820 }));
    }

    #[test]
    fn test_scroll_above_page_top() {
        let navigator = SectionNavigator::default();
        let req = navigate(&navigator, Route::Home, "hero", 1280, &layout())
            .expect("hero should resolve");
        assert_eq!(req, Some(ScrollRequest { top: -80 }));
    }

    #[test]
    fn test_unknown_section() {
        let navigator = SectionNavigator::default();
        assert_eq!(
            navigate(&navigator, Route::Home, "blog", 1280, &layout()),
            Err(NavError::SectionNotFound("blog".to_string()))
        );
    }

    #[test]
    fn test_unrendered_section() {
        let navigator = SectionNavigator::default();
        assert_eq!(
            navigator.resolve(Route::Home, "contact", &layout()),
            Err(NavError::SectionNotFound("contact".to_string()))
        );

        // element removed between click and delayed request
        let mut layout = layout();
        assert_eq!(
            navigator.resolve(Route::Home, "about", &layout),
            Ok(Some(SectionId::About))
        );
        layout.remove(&SectionId::About);
        assert!(navigator.request(SectionId::About, 1280, &layout).is_err());
    }

    #[test]
    fn test_menu_closes_after_scroll() {
        let navigator = SectionNavigator::default();
        let step = navigator
            .request(SectionId::About, 1280, &layout())
            .expect("about should resolve");
        assert_eq!(step.scroll, ScrollRequest { top: 820 });
        assert_eq!(step.menu, MenuEvent::Navigated);
        // closed regardless of the state it was in
        for state in [MenuState::Open, MenuState::Closed] {
            assert_eq!(state.on(step.menu), MenuState::Closed);
        }
    }

    #[test]
    fn test_unregistered_section() {
        let registry = SectionRegistry::new(vec![Section {
            id: SectionId::Hero,
            display_name: "Home",
        }])
        .expect("registry should be valid");
        let navigator = SectionNavigator::new(NavConfig::default(), registry);
        assert!(navigator.resolve(Route::Home, "about", &layout()).is_err());
        assert!(navigator.resolve(Route::Home, "hero", &layout()).is_ok());
    }

    #[test]
    fn test_skipped_off_home_route() {
        let navigator = SectionNavigator::default();
        for route in [Route::Projects, Route::Other] {
            assert_eq!(
                navigate(&navigator, route, "about", 1280, &layout()),
                Ok(None)
            );
            // even unknown targets are silently ignored there
            assert_eq!(
                navigate(&navigator, route, "blog", 1280, &layout()),
                Ok(None)
            );
        }
    }
}
