use leptos::prelude::*;

use crate::{
    content::{SocialKind, EMAIL, LOCATION, SOCIAL_LINKS},
    nav::SectionId,
};

pub fn social_icon_class(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "devicon-github-plain",
        SocialKind::LinkedIn => "devicon-linkedin-plain",
        SocialKind::Email => "extra-email",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section
            id=SectionId::Contact.dom_id()
            class="py-20 bg-gradient-to-b from-gray-900 to-black text-white"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-4xl text-center">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                    "Get In "
                    <span class="text-blue-400">"Touch"</span>
                </h2>
                <p class="text-gray-300 mb-10 max-w-2xl mx-auto">
                    "Open to internships, collaborations and interesting conversations. Reach out through any of the channels below."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 text-left">
                    <div class="bg-gray-800/50 p-6 rounded-lg border border-gray-700 space-y-4">
                        <a href=format!("mailto:{EMAIL}") class="flex items-center gap-3 hover:text-blue-400">
                            <i class="extra-email text-blue-400" />
                            <div>
                                <p class="text-xs text-gray-400">"Email"</p>
                                <p class="text-sm break-all">{EMAIL}</p>
                            </div>
                        </a>
                        <div class="flex items-center gap-3">
                            <i class="extra-location text-blue-400" />
                            <div>
                                <p class="text-xs text-gray-400">"Location"</p>
                                <p class="text-sm">{LOCATION}</p>
                            </div>
                        </div>
                    </div>
                    <div class="bg-gray-800/50 p-6 rounded-lg border border-gray-700">
                        <h3 class="text-lg font-semibold mb-4">"Find me online"</h3>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-10 h-10 rounded-full bg-gray-700 hover:bg-blue-600 flex items-center justify-center text-xl transition-colors"
                                            aria-label=link.name
                                        >
                                            <i class=social_icon_class(link.kind) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
