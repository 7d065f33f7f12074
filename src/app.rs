mod about;
mod contact;
mod education;
mod footer;
mod hero;
mod host;
mod navbar;
mod projects;
mod technologies;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_SHORT_NAME;

use about::About;
use contact::Contact;
use education::Education;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::{Projects, ProjectsListPage};
use technologies::Technologies;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_SHORT_NAME} - {title}") />
        <Router>
            <SiteFrame />
        </Router>
    }
}

/// Everything inside the router: navigation state lives here so that both
/// routes share one navbar and footer.
#[component]
fn SiteFrame() -> impl IntoView {
    let host = host::provide_host_signals();
    host::provide_navigation(host);

    view! {
        <Navbar />
        <main class="flex flex-col w-full">
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/projects") view=ProjectsListPage />
            </Routes>
        </main>
        <Footer />
    }
}

/// Every section in document order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Education />
        <Technologies />
        <Projects />
        <Contact />
    }
}
