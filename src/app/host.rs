//! Window signals and navigation state shared across the component tree.
//!
//! Resize and scroll are observed once, at the root of the app, and handed
//! out through context. Listeners belong to the reactive owner that
//! created them and are released with it.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::nav::{
    MenuEvent, MenuState, NavConfig, Route, ScrollRequest, ScrollState, ScrollTracker,
    SectionBounds, SectionId, SectionLayout, SectionNavigator, ViewportMode,
};

#[derive(Debug, Clone, Copy)]
pub struct HostSignals {
    /// `window.innerWidth` in whole pixels.
    pub width: Signal<u32>,
    /// `window.scrollY` in whole pixels.
    pub scroll_y: Signal<u32>,
    pub mode: Memo<ViewportMode>,
}

/// Browser dimensions come in as floats; the server reports an infinitely
/// wide window, which saturates into the desktop layout.
fn to_pixels(value: f64) -> u32 {
    value.max(0.0) as u32
}

pub fn provide_host_signals() -> HostSignals {
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let (_, scroll_y) = use_window_scroll();

    let width = Signal::derive(move || to_pixels(width.get()));
    let scroll_y = Signal::derive(move || to_pixels(scroll_y.get()));
    // effects only run in the browser, after hydration
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));

    let config = NavConfig::default();
    let mode = Memo::new(move |_| {
        config.mounted_viewport_mode(mounted.get().then(|| width.get()))
    });

    let host = HostSignals {
        width,
        scroll_y,
        mode,
    };
    provide_context(host);
    host
}

pub fn use_host_signals() -> HostSignals {
    expect_context::<HostSignals>()
}

/// Section positions read straight from the rendered document.
struct DocumentLayout;

impl SectionLayout for DocumentLayout {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let el = document()
            .get_element_by_id(id.dom_id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds {
            offset_top: el.offset_top(),
            offset_height: el.offset_height(),
        })
    }
}

pub fn smooth_scroll(request: ScrollRequest) {
    let options = ScrollToOptions::new();
    options.set_top(f64::from(request.top));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[derive(Clone, Copy)]
pub struct Navigation {
    pub host: HostSignals,
    pub route: Memo<Route>,
    pub menu: RwSignal<MenuState>,
    pub scroll: RwSignal<ScrollState>,
    navigator: StoredValue<SectionNavigator>,
}

/// Must be called inside the router.
pub fn provide_navigation(host: HostSignals) -> Navigation {
    let pathname = use_location().pathname;
    let route = Memo::new(move |_| Route::from_path(&pathname.get()));
    let tracker = ScrollTracker::default();
    let menu = RwSignal::new(MenuState::default());
    let scroll = RwSignal::new(tracker.initial_state());

    Effect::watch(
        move || (host.scroll_y.get(), route.get()),
        move |(offset_y, route), _, _| {
            scroll.maybe_update(|state| {
                let next = tracker.observe(state, *offset_y, *route, &DocumentLayout);
                if next == *state {
                    return false;
                }
                *state = next;
                true
            });
        },
        // a reload can land mid-page
        true,
    );

    // mode only notifies on change, so this fires on transitions
    Effect::watch(
        move || host.mode.get(),
        move |mode, _, _| {
            menu.update(|m| *m = m.on(MenuEvent::ViewportChanged(*mode)));
        },
        false,
    );

    Effect::watch(
        move || route.get(),
        move |_, _, _| {
            menu.update(|m| *m = m.on(MenuEvent::Navigated));
        },
        false,
    );

    let nav = Navigation {
        host,
        route,
        menu,
        scroll,
        navigator: StoredValue::new(SectionNavigator::default()),
    };
    provide_context(nav);
    nav
}

pub fn use_navigation() -> Navigation {
    expect_context::<Navigation>()
}

impl Navigation {
    pub fn apply(&self, event: MenuEvent) {
        self.menu.update(|m| *m = m.on(event));
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.scroll.with(|s| s.active_section == id)
    }

    /// Smooth-scrolls to the section with DOM id `target` and closes the
    /// menu. Off the home route this does nothing.
    pub fn scroll_to(&self, target: &str) {
        let route = self.route.get_untracked();
        let id = match self
            .navigator
            .with_value(|n| n.resolve(route, target, &DocumentLayout))
        {
            Ok(Some(id)) => id,
            Ok(None) => {
                log::debug!("not scrolling to \"{target}\" on {route:?} route");
                return;
            }
            Err(err) => {
                log::warn!("{err}");
                return;
            }
        };

        let this = *self;
        let delay = self.navigator.with_value(|n| n.config().navigation_delay);
        set_timeout(
            move || {
                let width = this.host.width.get_untracked();
                match this
                    .navigator
                    .with_value(|n| n.request(id, width, &DocumentLayout))
                {
                    Ok(step) => {
                        log::debug!("scrolling to {id} at {}", step.scroll.top);
                        smooth_scroll(step.scroll);
                        this.apply(step.menu);
                    }
                    Err(err) => log::warn!("{err}"),
                }
            },
            delay,
        );
    }

    pub fn scroll_to_top(&self) {
        smooth_scroll(ScrollRequest::TOP_OF_PAGE);
    }
}
