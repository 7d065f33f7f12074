use leptos::{either::*, ev::MouseEvent, prelude::*};

use crate::{
    content::{EMAIL, LOCATION, OWNER_SHORT_NAME, SOCIAL_LINKS, TAGLINE},
    nav::SectionRegistry,
};

use super::{
    contact::social_icon_class,
    host::{use_navigation, Navigation},
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <footer class="bg-gradient-to-b from-gray-900 to-black text-white pt-16 pb-6 border-t border-gray-800">
            <ScrollToTop nav />
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    if nav.host.mode.get().is_mobile() {
                        "space-y-10 mb-12"
                    } else {
                        "grid grid-cols-3 gap-10 mb-12"
                    }
                }>
                    <div class="bg-gray-800/30 p-6 rounded-lg border border-gray-700">
                        <h3 class="text-xl font-bold mb-4 pb-2 border-b border-gray-700 inline-block">
                            {OWNER_SHORT_NAME}
                        </h3>
                        <p class="text-gray-300 mb-6">{TAGLINE}</p>
                        <div class="flex space-x-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-10 h-10 bg-gray-800 hover:bg-blue-600 rounded-full flex items-center justify-center shadow-md transition-all"
                                            aria-label=link.name
                                        >
                                            <i class=social_icon_class(link.kind) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="bg-gray-800/30 p-6 rounded-lg border border-gray-700">
                        <h3 class="text-xl font-bold mb-4 pb-2 border-b border-gray-700 inline-block">
                            "Quick Links"
                        </h3>
                        <QuickLinks nav />
                    </div>

                    <div class="bg-gray-800/30 p-6 rounded-lg border border-gray-700">
                        <h3 class="text-xl font-bold mb-4 pb-2 border-b border-gray-700 inline-block">
                            "Contact"
                        </h3>
                        <div class="space-y-4 text-sm text-gray-300">
                            <a href=format!("mailto:{EMAIL}") class="block hover:text-blue-400 break-all">
                                {EMAIL}
                            </a>
                            <p>{LOCATION}</p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-6 text-center text-gray-400 text-sm">
                    {format!("© {BUILD_YEAR} {OWNER_SHORT_NAME}. All rights reserved.")}
                </div>
            </div>
        </footer>
    }
}

/// Section shortcuts; they scroll in place on the home page and lead back
/// to it from anywhere else.
#[component]
fn QuickLinks(nav: Navigation) -> impl IntoView {
    let sections = SectionRegistry::default().iter().cloned().collect::<Vec<_>>();
    view! {
        <div class="grid grid-cols-2 gap-2">
            {sections
                .into_iter()
                .map(|section| {
                    let id = section.id;
                    move || {
                        if nav.route.get().has_sections() {
                            Either::Left(view! {
                                <a
                                    href=format!("#{id}")
                                    class="text-gray-300 hover:text-blue-400 transition-colors py-2"
                                    on:click=move |ev: MouseEvent| {
                                        ev.prevent_default();
                                        nav.scroll_to(id.dom_id());
                                    }
                                >
                                    {section.display_name}
                                </a>
                            })
                        } else {
                            Either::Right(view! {
                                <a
                                    href=format!("/#{id}")
                                    class="text-gray-300 hover:text-blue-400 transition-colors py-2"
                                >
                                    {section.display_name}
                                </a>
                            })
                        }
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ScrollToTop(nav: Navigation) -> impl IntoView {
    let visible = move || nav.scroll.with(|s| s.show_scroll_to_top);
    view! {
        <button
            class="fixed bottom-8 right-8 w-12 h-12 rounded-full bg-blue-600 text-white flex items-center justify-center shadow-lg z-50 transition-all duration-300"
            class:opacity-0=move || !visible()
            class:pointer-events-none=move || !visible()
            class:translate-y-24=move || !visible()
            aria-label="Scroll to top"
            on:click=move |_| nav.scroll_to_top()
        >
            <i class="extra-arrow-up" />
        </button>
    }
}
