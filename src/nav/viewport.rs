#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportMode {
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavConfig;

    #[test]
    fn test_breakpoint() {
        let config = NavConfig::default();
        for width in [0, 320, 640, 767] {
            assert_eq!(config.viewport_mode(width), ViewportMode::Mobile);
        }
        for width in [768, 1024, 1920, u32::MAX] {
            assert_eq!(config.viewport_mode(width), ViewportMode::Desktop);
        }
    }

    #[test]
    fn test_custom_breakpoint() {
        let config = NavConfig {
            mobile_breakpoint: 1024,
            ..NavConfig::default()
        };
        assert!(config.viewport_mode(900).is_mobile());
        assert!(!config.viewport_mode(1024).is_mobile());
    }
}
