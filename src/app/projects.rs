use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::{
    content::{featured_projects, Project, PROJECTS},
    nav::SectionId,
};

use super::host::use_host_signals;

#[component]
pub fn Projects() -> impl IntoView {
    let host = use_host_signals();

    view! {
        <section
            id=SectionId::Projects.dom_id()
            class="relative w-full py-20 bg-gradient-to-b from-gray-900 to-black text-white"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12">
                    "Featured "
                    <span class="text-blue-400">"Projects"</span>
                </h2>
                <div class=move || {
                    if host.mode.get().is_mobile() {
                        "space-y-8"
                    } else {
                        "grid grid-cols-2 lg:grid-cols-3 gap-8"
                    }
                }>
                    {featured_projects()
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project with_highlights=true /> })
                        .collect_view()}
                </div>
                <div class="mt-12 text-center">
                    <A
                        href="/projects"
                        attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-lg bg-blue-600 hover:bg-blue-700 font-medium transition-colors"
                    >
                        "View All Projects"
                        <i class="extra-arrow-right" />
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsListPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="w-full min-h-screen pt-28 pb-20 bg-gradient-to-b from-gray-900 to-black text-white">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 text-blue-400 hover:text-blue-300 mb-8"
                >
                    <i class="extra-arrow-left" />
                    "Back to Home"
                </A>
                <h1 class="text-3xl sm:text-4xl font-bold mb-12">
                    "All "
                    <span class="text-blue-400">"Projects"</span>
                </h1>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project with_highlights=false /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, with_highlights: bool) -> impl IntoView {
    view! {
        <div class="flex flex-col bg-gray-800/50 rounded-xl border border-gray-700 p-6 hover:-translate-y-2 transition-transform duration-300">
            <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
            <p class="text-gray-300 text-sm mb-4 flex-grow">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .technologies
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2 py-1 text-xs rounded-md bg-blue-900/30 text-blue-300">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            {(with_highlights && !project.highlights.is_empty())
                .then(|| {
                    view! {
                        <ul class="list-disc list-inside text-sm text-gray-400 space-y-1 mb-4">
                            {project.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                        </ul>
                    }
                })}
            <div class="flex gap-4 text-lg">
                <a
                    href=project.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:text-blue-400"
                    aria-label="Source code"
                >
                    <i class="devicon-github-plain" />
                </a>
                {project
                    .live
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-blue-400"
                                aria-label="Live demo"
                            >
                                <i class="extra-link" />
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
