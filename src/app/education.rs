use leptos::{either::*, prelude::*};

use crate::{
    content::{EducationEntry, EDUCATION},
    nav::SectionId,
};

use super::host::use_host_signals;

/// At most one card is expanded; clicking it again collapses it.
fn toggle_card(expanded: Option<usize>, index: usize) -> Option<usize> {
    if expanded == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[component]
pub fn Education() -> impl IntoView {
    let host = use_host_signals();
    let (expanded, set_expanded) = signal(None::<usize>);

    view! {
        <section
            id=SectionId::Education.dom_id()
            class="relative w-full py-20 bg-gradient-to-b from-gray-900 to-black text-white"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-5xl">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12">
                    <span class="text-blue-400">"Education"</span>
                </h2>
                <div class=move || {
                    if host.mode.get().is_mobile() { "space-y-6" } else { "space-y-8 pl-8 border-l-2 border-blue-500/30" }
                }>
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let is_open = move || expanded.get() == Some(i);
                            view! {
                                <div
                                    class="bg-gray-800/50 p-6 rounded-lg border border-gray-700 cursor-pointer hover:border-blue-500/50 transition-colors"
                                    on:click=move |_| set_expanded.update(|e| *e = toggle_card(*e, i))
                                >
                                    <div class="flex flex-col sm:flex-row sm:items-start sm:justify-between gap-2">
                                        <div>
                                            <h3 class="text-lg sm:text-xl font-semibold">{entry.degree}</h3>
                                            <p class="text-blue-300">{entry.institution}</p>
                                            <p class="text-sm text-gray-400">{entry.location}</p>
                                        </div>
                                        <div class="text-sm text-gray-400 sm:text-right">
                                            <p>{entry.duration}</p>
                                            <p class="text-green-400">{entry.grade}</p>
                                        </div>
                                    </div>
                                    {move || {
                                        if is_open() {
                                            Either::Left(view! { <EducationDetails entry=*entry /> })
                                        } else {
                                            Either::Right(view! {
                                                <p class="mt-3 text-xs text-gray-500">"Click for details"</p>
                                            })
                                        }
                                    }}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EducationDetails(entry: EducationEntry) -> impl IntoView {
    let list = |title: &'static str, items: &'static [&'static str]| {
        view! {
            <div>
                <h4 class="font-medium text-gray-200 mb-2">{title}</h4>
                <ul class="list-disc list-inside text-sm text-gray-400 space-y-1">
                    {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
        }
    };
    view! {
        <div class="mt-4 grid grid-cols-1 md:grid-cols-2 gap-4">
            {list("Achievements", entry.achievements)}
            {list("Courses", entry.courses)}
        </div>
        <div class="mt-4 flex flex-wrap gap-2">
            {entry
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <span class="px-2 py-1 text-xs rounded-md bg-blue-900/30 text-blue-300">
                            {*skill}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_card() {
        assert_eq!(toggle_card(None, 1), Some(1));
        assert_eq!(toggle_card(Some(1), 1), None);
        // opening another card collapses the first
        assert_eq!(toggle_card(Some(0), 1), Some(1));
    }
}
