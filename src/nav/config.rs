use std::time::Duration;

use super::viewport::ViewportMode;

/// Thresholds, offsets and timings shared by the navigation controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Widths below this are [`ViewportMode::Mobile`].
    pub mobile_breakpoint: u32,
    /// Widths below this use `compact_header_offset`.
    pub compact_breakpoint: u32,
    pub header_offset: u32,
    pub compact_header_offset: u32,
    /// Navbar switches to its solid background past this offset.
    pub scrolled_threshold: u32,
    /// Scroll-to-top control appears past this offset.
    pub scroll_to_top_threshold: u32,
    /// How far ahead of a section's top it already counts as active.
    pub section_lead: i32,
    /// Delay between a navigation click and reading element offsets.
    pub navigation_delay: Duration,
    pub typewriter_interval: Duration,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            compact_breakpoint: 640,
            header_offset: 80,
            compact_header_offset: 70,
            scrolled_threshold: 50,
            scroll_to_top_threshold: 500,
            section_lead: 100,
            navigation_delay: Duration::from_millis(100),
            typewriter_interval: Duration::from_millis(100),
        }
    }
}

impl NavConfig {
    pub fn viewport_mode(&self, width: u32) -> ViewportMode {
        if width < self.mobile_breakpoint {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    /// Mode for a width that is only read once the app has mounted.
    ///
    /// `None` before mount yields the server-rendered [`ViewportMode::Desktop`]
    /// layout, so hydration sees the same classes the server sent.
    pub fn mounted_viewport_mode(&self, width: Option<u32>) -> ViewportMode {
        width.map_or(ViewportMode::default(), |width| self.viewport_mode(width))
    }

    /// Height of the fixed header that a scrolled-to section must clear.
    ///
    /// Uses the finer compact breakpoint rather than the mobile one: the
    /// header only shrinks on the narrowest screens.
    pub fn header_offset_for(&self, width: u32) -> u32 {
        if width < self.compact_breakpoint {
            self.compact_header_offset
        } else {
            self.header_offset
        }
    }
}
