use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::{
    content::{EMAIL, OWNER_NAME, RESUME_FILE_NAME, RESUME_PATH, SOCIAL_LINKS, TAGLINE},
    nav::{typewriter_signal, NavConfig, SectionId, Typewriter},
};

use super::{contact::social_icon_class, host::use_navigation};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <section
            id=SectionId::Hero.dom_id()
            class="relative min-h-screen w-full flex items-center justify-center px-4 sm:px-6 lg:px-8 py-12 sm:py-16 bg-gradient-to-br from-gray-900 via-black to-gray-900 text-white overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-16">
                <div class="flex flex-col lg:flex-row items-center justify-between gap-8 lg:gap-4">
                    <div class="w-full lg:w-1/2 space-y-5 sm:space-y-6 text-center lg:text-left order-2 lg:order-1">
                        <div class="inline-block px-4 py-1.5 rounded-full bg-gradient-to-r from-blue-500/20 to-purple-500/20 border border-blue-500/30 mb-4">
                            <span class="text-blue-300 font-medium">"Hello, I'm"</span>
                        </div>
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight tracking-tight mb-3">
                            <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-300 to-purple-400">
                                {OWNER_NAME}
                            </span>
                        </h1>
                        <TypewriterLine text=TAGLINE />
                        <p class="text-gray-300 text-base sm:text-lg max-w-lg mx-auto lg:mx-0 mb-8 leading-relaxed">
                            "A web developer and AI/ML enthusiast who enjoys turning complex challenges into simple, user-friendly solutions."
                        </p>
                        <div class="flex flex-wrap gap-3 sm:gap-4 justify-center lg:justify-start pt-2">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-2 bg-gray-800/80 hover:bg-gray-700 transition-all duration-300 px-4 py-2.5 rounded-lg border border-gray-700/50"
                                        >
                                            <i class=social_icon_class(link.kind) />
                                            <span class="hidden sm:inline">{link.name}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="pt-8 flex items-center gap-3 justify-center lg:justify-start text-gray-300">
                            <i class="extra-email text-blue-300" />
                            <span class="tracking-wide text-sm sm:text-base">{EMAIL}</span>
                        </div>
                        <div class="pt-8 flex flex-wrap gap-4 justify-center lg:justify-start">
                            <a
                                href=format!("#{}", SectionId::Projects)
                                class="bg-gradient-to-r from-blue-600 to-indigo-600 hover:from-blue-700 hover:to-indigo-700 px-6 py-3 rounded-lg font-medium shadow-lg inline-flex items-center gap-2 transition-all duration-300"
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    nav.scroll_to(SectionId::Projects.dom_id());
                                }
                            >
                                "View My Work"
                            </a>
                            <a
                                href=RESUME_PATH
                                download=RESUME_FILE_NAME
                                class="bg-gray-800/80 hover:bg-gray-700 border border-gray-700/50 px-6 py-3 rounded-lg font-medium shadow-lg inline-flex items-center gap-2 transition-all duration-300"
                            >
                                <i class="extra-download text-blue-400" />
                                "Download CV"
                            </a>
                        </div>
                    </div>
                    <div class="w-full lg:w-1/2 flex justify-center order-1 lg:order-2 mb-8 lg:mb-0">
                        <div class="relative w-[250px] h-[250px] sm:w-[300px] sm:h-[300px] rounded-full overflow-hidden border-4 border-gray-800/80 shadow-2xl">
                            <img src="/profile.jpg" alt=OWNER_NAME class="w-full h-full object-cover" />
                        </div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center text-blue-300 animate-bounce">
                <span class="text-sm mb-2 text-gray-300">"Scroll Down"</span>
                <i class="extra-arrow-down" />
            </div>
        </section>
    }
}

/// Types `text` out one character per tick, followed by a blinking cursor.
#[component]
fn TypewriterLine(text: &'static str) -> impl IntoView {
    let (typewriter, tick) = typewriter_signal(text);
    let interval = NavConfig::default().typewriter_interval.as_millis() as u64;

    // the interval is cleared when this component unmounts
    let Pausable { pause, .. } = use_interval_fn(tick, interval);
    Effect::new(move |_| {
        if typewriter.with(Typewriter::is_done) {
            pause();
        }
    });

    view! {
        <div class="min-h-[40px] sm:min-h-[48px] mb-5">
            <div class="text-lg sm:text-xl md:text-2xl text-gray-200 font-medium flex flex-wrap justify-center lg:justify-start">
                <span class="break-words">{move || typewriter.with(|t| t.revealed().to_string())}</span>
                <span class="inline-block w-[3px] h-[1em] bg-blue-400 ml-1 animate-pulse" />
            </div>
        </div>
    }
}
