use super::{
    config::NavConfig,
    route::Route,
    section::{SectionId, SectionLayout, SectionRegistry},
};

/// What the page derives from the current vertical scroll offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub offset_y: u32,
    /// Navbar switches to its solid background.
    pub past_threshold: bool,
    pub show_scroll_to_top: bool,
    pub active_section: SectionId,
}

impl ScrollState {
    /// State at the top of a freshly loaded page.
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            offset_y: 0,
            past_threshold: false,
            show_scroll_to_top: false,
            active_section: registry.first(),
        }
    }
}

pub struct ScrollTracker {
    config: NavConfig,
    registry: SectionRegistry,
}

impl ScrollTracker {
    pub fn new(config: NavConfig, registry: SectionRegistry) -> Self {
        Self { config, registry }
    }

    pub fn initial_state(&self) -> ScrollState {
        ScrollState::new(&self.registry)
    }

    pub fn past_threshold(&self, offset_y: u32) -> bool {
        offset_y > self.config.scrolled_threshold
    }

    pub fn show_scroll_to_top(&self, offset_y: u32) -> bool {
        offset_y > self.config.scroll_to_top_threshold
    }

    /// The last section in document order whose (lead-adjusted) bounds
    /// contain `offset_y`. Sections without an element are skipped.
    pub fn section_at(&self, offset_y: u32, layout: &impl SectionLayout) -> Option<SectionId> {
        let offset = i64::from(offset_y);
        self.registry
            .iter()
            .filter_map(|section| layout.bounds(section.id).map(|b| (section.id, b)))
            .filter(|(_, bounds)| {
                let top = i64::from(bounds.offset_top) - i64::from(self.config.section_lead);
                let bottom = top + i64::from(bounds.offset_height);
                offset >= top && offset < bottom
            })
            .last()
            .map(|(id, _)| id)
    }

    /// Applies one scroll event to `prev`.
    ///
    /// The active section only moves on routes that have sections, and
    /// stays put when the offset falls outside every section.
    pub fn observe(
        &self,
        prev: &ScrollState,
        offset_y: u32,
        route: Route,
        layout: &impl SectionLayout,
    ) -> ScrollState {
        let active_section = if route.has_sections() {
            self.section_at(offset_y, layout)
                .unwrap_or(prev.active_section)
        } else {
            prev.active_section
        };
        ScrollState {
            offset_y,
            past_threshold: self.past_threshold(offset_y),
            show_scroll_to_top: self.show_scroll_to_top(offset_y),
            active_section,
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(NavConfig::default(), SectionRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::nav::SectionBounds;

    // Elements placed so that, after the 100px lead, the sections cover
    // hero [0, 800), about [800, 1600) and education [1600, 2400).
    fn three_section_layout() -> HashMap<SectionId, SectionBounds> {
        HashMap::from([
            (
                SectionId::Hero,
                SectionBounds {
                    offset_top: 100,
                    offset_height: 800,
                },
            ),
            (
                SectionId::About,
                SectionBounds {
                    offset_top: 900,
                    offset_height: 800,
                },
            ),
            (
                SectionId::Education,
                SectionBounds {
                    offset_top: 1700,
                    offset_height: 800,
                },
            ),
        ])
    }

    fn scroll_through(tracker: &ScrollTracker, offsets: &[u32], route: Route) -> ScrollState {
        let layout = three_section_layout();
        offsets
            .iter()
            .fold(tracker.initial_state(), |state, &y| {
                tracker.observe(&state, y, route, &layout)
            })
    }

    #[test]
    fn test_thresholds_are_independent() {
        let tracker = ScrollTracker::default();
        let cases = [
            (0, false, false),
            (50, false, false),
            (51, true, false),
            (500, true, false),
            (501, true, true),
            (10_000, true, true),
        ];
        for (y, past, top) in cases {
            assert_eq!(tracker.past_threshold(y), past, "past_threshold({y})");
            assert_eq!(tracker.show_scroll_to_top(y), top, "show_scroll_to_top({y})");
        }
    }

    #[test]
    fn test_active_section_by_offset() {
        let tracker = ScrollTracker::default();
        let layout = three_section_layout();

        assert_eq!(tracker.section_at(0, &layout), Some(SectionId::Hero));
        assert_eq!(tracker.section_at(799, &layout), Some(SectionId::Hero));
        assert_eq!(tracker.section_at(800, &layout), Some(SectionId::About));
        assert_eq!(tracker.section_at(850, &layout), Some(SectionId::About));
        assert_eq!(tracker.section_at(1600, &layout), Some(SectionId::Education));
        // upper bound is exclusive
        assert_eq!(tracker.section_at(2400, &layout), None);
        assert_eq!(tracker.section_at(3000, &layout), None);
    }

    #[test]
    fn test_active_section_retained_past_last_section() {
        let tracker = ScrollTracker::default();

        let state = scroll_through(&tracker, &[0], Route::Home);
        assert_eq!(state.active_section, SectionId::Hero);

        let state = scroll_through(&tracker, &[0, 850], Route::Home);
        assert_eq!(state.active_section, SectionId::About);

        let state = scroll_through(&tracker, &[0, 850, 2000, 2400], Route::Home);
        assert_eq!(state.active_section, SectionId::Education);

        let state = scroll_through(&tracker, &[0, 850, 2000, 2400, 3000], Route::Home);
        assert_eq!(state.active_section, SectionId::Education);
        assert_eq!(state.offset_y, 3000);
        assert!(state.past_threshold);
        assert!(state.show_scroll_to_top);
    }

    #[test]
    fn test_later_section_wins_overlap() {
        let tracker = ScrollTracker::default();
        let mut layout = three_section_layout();
        // hero grows to overlap the start of about
        layout.insert(
            SectionId::Hero,
            SectionBounds {
                offset_top: 100,
                offset_height: 1000,
            },
        );
        assert_eq!(tracker.section_at(850, &layout), Some(SectionId::About));
        assert_eq!(tracker.section_at(750, &layout), Some(SectionId::Hero));
    }

    #[test]
    fn test_missing_elements_skipped() {
        let tracker = ScrollTracker::default();
        let mut layout = three_section_layout();
        layout.remove(&SectionId::About);

        assert_eq!(tracker.section_at(850, &layout), None);
        assert_eq!(tracker.section_at(1700, &layout), Some(SectionId::Education));

        let empty = HashMap::<SectionId, SectionBounds>::new();
        let state = tracker.observe(&tracker.initial_state(), 1200, Route::Home, &empty);
        assert_eq!(state.active_section, SectionId::Hero);
    }

    #[test]
    fn test_active_section_frozen_off_home_route() {
        let tracker = ScrollTracker::default();

        let state = scroll_through(&tracker, &[850, 2000], Route::Projects);
        assert_eq!(state.active_section, SectionId::Hero);
        // thresholds still track the offset
        assert_eq!(state.offset_y, 2000);
        assert!(state.show_scroll_to_top);

        let layout = three_section_layout();
        let on_home = scroll_through(&tracker, &[850], Route::Home);
        let state = tracker.observe(&on_home, 2000, Route::Other, &layout);
        assert_eq!(state.active_section, SectionId::About);
    }

    #[test]
    fn test_negative_lead_adjusted_top() {
        // a section at the very top starts before offset zero once the lead
        // is applied
        let tracker = ScrollTracker::default();
        let layout = HashMap::from([(
            SectionId::Hero,
            SectionBounds {
                offset_top: 0,
                offset_height: 800,
            },
        )]);
        assert_eq!(tracker.section_at(0, &layout), Some(SectionId::Hero));
        assert_eq!(tracker.section_at(699, &layout), Some(SectionId::Hero));
        assert_eq!(tracker.section_at(700, &layout), None);
    }
}
