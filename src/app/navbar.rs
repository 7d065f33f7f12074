use leptos::{either::*, ev, ev::MouseEvent, html, prelude::*};
use leptos_router::components::*;
use wasm_bindgen::JsCast;

use crate::{
    content::OWNER_SHORT_NAME,
    nav::{MenuEvent, Route, Section, SectionId, SectionRegistry},
};

use super::host::{use_navigation, Navigation};

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_navigation();
    let menu_ref = NodeRef::<html::Div>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    // close the drawer on presses outside of it; the toggle button handles
    // its own clicks
    let handle = window_event_listener(ev::pointerdown, move |ev| {
        if !nav.menu.get_untracked().is_open() {
            return;
        }
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| {
                let in_menu = menu_ref
                    .get_untracked()
                    .is_some_and(|el| el.contains(Some(&node)));
                let in_toggle = toggle_ref
                    .get_untracked()
                    .is_some_and(|el| el.contains(Some(&node)));
                in_menu || in_toggle
            });
        nav.apply(MenuEvent::PointerDown { inside });
    });
    on_cleanup(move || handle.remove());

    let (first_name, last_name) = OWNER_SHORT_NAME
        .split_once(' ')
        .unwrap_or((OWNER_SHORT_NAME, ""));
    let (first_initial, first_rest) =
        first_name.split_at(first_name.chars().next().map_or(0, char::len_utf8));

    view! {
        <nav class=move || {
            if nav.scroll.with(|s| s.past_threshold) {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-gray-900/95 backdrop-blur-sm shadow-lg py-2 sm:py-3"
            } else {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-transparent py-3 sm:py-5"
            }
        }>
            <div class="container mx-auto px-4 sm:px-6">
                <div class="flex justify-between items-center">
                    <div class="text-white font-bold text-lg sm:text-xl">
                        <A href="/" attr:class="flex items-center">
                            <span class="text-blue-400">{first_initial}</span>
                            {first_rest}
                            <span class="ml-1 text-gray-400 font-normal">{last_name}</span>
                        </A>
                    </div>

                    <div class="hidden md:flex space-x-1 lg:space-x-2">
                        <NavLinks nav mobile=false />
                        <ContactButton nav mobile=false />
                    </div>

                    <button
                        node_ref=toggle_ref
                        class="md:hidden text-white focus:outline-none bg-gray-800/80 p-2 rounded-md"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.apply(MenuEvent::Toggle)
                    >
                        <i class=move || {
                            if nav.menu.get().is_open() { "extra-close" } else { "extra-menu" }
                        } />
                    </button>
                </div>

                <Show when=move || nav.menu.get().is_open()>
                    <div
                        node_ref=menu_ref
                        class="md:hidden fixed left-0 right-0 mx-4 mt-4 bg-gray-800/95 backdrop-blur-sm rounded-lg overflow-hidden shadow-xl z-50"
                    >
                        <div class="flex flex-col p-2 sm:p-4">
                            <NavLinks nav mobile=true />
                            <ContactButton nav mobile=true />
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

fn link_class(mobile: bool, active: bool) -> &'static str {
    match (mobile, active) {
        (false, true) => "px-2 sm:px-3 md:px-4 py-2 rounded-md text-sm font-medium transition-colors duration-300 relative text-blue-400 border-b-2 border-blue-400",
        (false, false) => "px-2 sm:px-3 md:px-4 py-2 rounded-md text-sm font-medium transition-colors duration-300 relative text-gray-300 hover:text-white",
        (true, true) => "block py-2.5 sm:py-3 px-4 rounded-md transition-colors duration-300 text-sm sm:text-base text-blue-400 bg-blue-900/20",
        (true, false) => "block py-2.5 sm:py-3 px-4 rounded-md transition-colors duration-300 text-sm sm:text-base text-white hover:bg-gray-700/50",
    }
}

/// Section anchors on the home page, plain route links elsewhere.
#[component]
fn NavLinks(nav: Navigation, mobile: bool) -> impl IntoView {
    let sections = SectionRegistry::default().iter().cloned().collect::<Vec<_>>();
    move || {
        if nav.route.get().has_sections() {
            let links = sections
                .clone()
                .into_iter()
                .map(|Section { id, display_name }| {
                    view! {
                        <a
                            href=format!("#{id}")
                            class=move || link_class(mobile, nav.is_active(id))
                            on:click=move |ev: MouseEvent| {
                                ev.prevent_default();
                                nav.scroll_to(id.dom_id());
                            }
                        >
                            {display_name}
                        </a>
                    }
                })
                .collect_view();
            Either::Left(links)
        } else {
            let on_projects = move || nav.route.get() == Route::Projects;
            Either::Right(view! {
                <A href="/" attr:class=link_class(mobile, false)>
                    "Home"
                </A>
                <A href="/projects" attr:class=move || link_class(mobile, on_projects())>
                    "Projects"
                </A>
            })
        }
    }
}

#[component]
fn ContactButton(nav: Navigation, mobile: bool) -> impl IntoView {
    let class = if mobile {
        "block w-full mt-2 sm:mt-3 py-2.5 sm:py-3 bg-blue-600 text-white rounded-md font-medium hover:bg-blue-700 transition-colors text-sm sm:text-base text-center"
    } else {
        "ml-2 sm:ml-4 px-3 sm:px-4 py-1.5 bg-blue-600 text-white rounded-md text-sm font-medium hover:bg-blue-700 transition-colors"
    };
    move || {
        if nav.route.get().has_sections() {
            Either::Left(view! {
                <button
                    class=class
                    on:click=move |_| nav.scroll_to(SectionId::Contact.dom_id())
                >
                    "Contact Me"
                </button>
            })
        } else {
            Either::Right(view! {
                <a href="/#contact" class=class>
                    "Contact Me"
                </a>
            })
        }
    }
}
