use leptos::prelude::*;

use crate::{content::SKILLS, nav::SectionId};

use super::host::use_host_signals;

#[component]
pub fn About() -> impl IntoView {
    let host = use_host_signals();
    let (active_tab, set_active_tab) = signal(0usize);

    let skill = move || SKILLS.get(active_tab.get()).or_else(|| SKILLS.first()).copied();

    view! {
        <section
            id=SectionId::About.dom_id()
            class="relative w-full py-20 bg-gradient-to-b from-black to-gray-900 text-white"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12">
                    "About "
                    <span class="text-blue-400">"Me"</span>
                </h2>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 items-start">
                    <div class="space-y-4 text-gray-300 leading-relaxed">
                        <p>
                            "I'm a final-year B.Tech. student in Artificial Intelligence and Machine Learning who likes building things end to end: APIs, data pipelines and the interfaces on top of them."
                        </p>
                        <p>
                            "Most of my work sits where backend engineering meets machine learning, from automated trading systems to image search."
                        </p>
                    </div>
                    <div>
                        <div class=move || {
                            if host.mode.get().is_mobile() {
                                "flex overflow-x-auto gap-2 pb-2 mb-4"
                            } else {
                                "grid grid-cols-2 xl:grid-cols-3 gap-2 mb-4"
                            }
                        }>
                            {SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, s)| {
                                    view! {
                                        <button
                                            class=move || {
                                                if active_tab.get() == i {
                                                    "px-3 py-2 rounded-md text-sm font-medium whitespace-nowrap bg-blue-600 text-white"
                                                } else {
                                                    "px-3 py-2 rounded-md text-sm font-medium whitespace-nowrap bg-gray-800 text-gray-300 hover:bg-gray-700"
                                                }
                                            }
                                            on:click=move |_| set_active_tab.set(i)
                                        >
                                            {s.title}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {move || {
                            skill()
                                .map(|s| {
                                    view! {
                                        <div class="bg-gray-800/50 p-6 rounded-lg border border-gray-700">
                                            <h3 class="text-xl font-medium mb-3">{s.title}</h3>
                                            <p class="text-gray-400 mb-3">{s.description}</p>
                                            <p class="text-gray-400">{s.details}</p>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
