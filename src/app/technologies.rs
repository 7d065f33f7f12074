use leptos::prelude::*;

use crate::{
    content::{TechSkill, TECH_TABS},
    nav::SectionId,
};

#[component]
pub fn Technologies() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(0usize);

    view! {
        <section
            id=SectionId::Technologies.dom_id()
            class="relative w-full py-20 bg-gradient-to-b from-black to-gray-900 text-white"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-5xl">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-8">
                    "Technical "
                    <span class="text-blue-400">"Skills"</span>
                </h2>
                <div class="flex justify-center mb-10">
                    <div class="inline-flex p-1 bg-gray-800 rounded-lg">
                        {TECH_TABS
                            .iter()
                            .enumerate()
                            .map(|(i, tab)| {
                                view! {
                                    <button
                                        class=move || {
                                            if active_tab.get() == i {
                                                "px-6 py-2 rounded-md text-sm font-medium bg-gradient-to-r from-blue-600/80 to-purple-600/80 text-white"
                                            } else {
                                                "px-6 py-2 rounded-md text-sm font-medium text-gray-300"
                                            }
                                        }
                                        on:click=move |_| set_active_tab.set(i)
                                    >
                                        {tab.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                // both tabs stay mounted, only the visible one changes
                {TECH_TABS
                    .iter()
                    .enumerate()
                    .map(|(i, tab)| {
                        view! {
                            <div
                                class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6"
                                class:hidden=move || active_tab.get() != i
                            >
                                {tab
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <SkillCard skill=*skill /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: TechSkill) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 p-5 rounded-lg border border-gray-700">
            <div class="flex justify-between items-center mb-3">
                <h3 class="font-semibold">{skill.name}</h3>
                <span class="text-sm text-blue-300">{format!("{}%", skill.level)}</span>
            </div>
            <div class="w-full h-2 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-blue-500 to-purple-500 rounded-full"
                    style:width=format!("{}%", skill.level)
                />
            </div>
            {(!skill.related.is_empty())
                .then(|| {
                    view! {
                        <div class="mt-3 flex flex-wrap gap-1">
                            {skill
                                .related
                                .iter()
                                .map(|r| {
                                    view! {
                                        <span class="px-2 py-0.5 text-xs rounded bg-gray-700 text-gray-300">
                                            {*r}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}
