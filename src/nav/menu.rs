use super::viewport::ViewportMode;

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger control activated.
    Toggle,
    /// Pointer pressed somewhere on the page. The hamburger control counts
    /// as inside, it is handled by `Toggle`.
    PointerDown { inside: bool },
    /// A navigation entry was followed.
    Navigated,
    ViewportChanged(ViewportMode),
}

impl MenuState {
    pub fn on(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Open, MenuEvent::Toggle) => Self::Closed,
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::PointerDown { inside: false }) => Self::Closed,
            (_, MenuEvent::Navigated) => Self::Closed,
            (_, MenuEvent::ViewportChanged(ViewportMode::Desktop)) => Self::Closed,
            (state, _) => state,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[MenuEvent]) -> MenuState {
        events
            .iter()
            .fold(MenuState::default(), |state, &event| state.on(event))
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(run(&[MenuEvent::Toggle]), MenuState::Open);
        assert_eq!(run(&[MenuEvent::Toggle, MenuEvent::Toggle]), MenuState::Closed);
        assert_eq!(run(&[MenuEvent::Toggle; 3]), MenuState::Open);
    }

    #[test]
    fn test_pointer_down() {
        let outside = MenuEvent::PointerDown { inside: false };
        let inside = MenuEvent::PointerDown { inside: true };

        assert_eq!(run(&[MenuEvent::Toggle, outside]), MenuState::Closed);
        assert_eq!(run(&[MenuEvent::Toggle, inside]), MenuState::Open);
        // pressing anywhere while closed never opens the menu
        assert_eq!(run(&[outside]), MenuState::Closed);
        assert_eq!(run(&[inside]), MenuState::Closed);
    }

    #[test]
    fn test_navigation_closes() {
        assert_eq!(run(&[MenuEvent::Toggle, MenuEvent::Navigated]), MenuState::Closed);
        assert_eq!(run(&[MenuEvent::Navigated]), MenuState::Closed);
    }

    #[test]
    fn test_viewport_change() {
        let desktop = MenuEvent::ViewportChanged(ViewportMode::Desktop);
        let mobile = MenuEvent::ViewportChanged(ViewportMode::Mobile);

        assert_eq!(run(&[MenuEvent::Toggle, desktop]), MenuState::Closed);
        assert_eq!(run(&[MenuEvent::Toggle, mobile]), MenuState::Open);
        assert_eq!(run(&[desktop, MenuEvent::Toggle]), MenuState::Open);
    }
}
