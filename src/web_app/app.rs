// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up meta tags, the navigation shell and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{Footer, Navbar};
use crate::web_app::pages::{HomePage, RelatedPage, SearchPage, TrendingPage};

/// Root application component
///
/// Every route renders inside the same Navbar/Footer shell; one page view
/// is mounted at a time.
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Cine-AI" />
        <Meta name="description" content="Find movies by describing the vibe, see what's trending, and discover similar titles" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/cine_ai.css" />

        <Router>
            <div class="app-layout min-h-screen flex flex-col bg-slate-950 font-sans">
                <Navbar />
                <main class="main-content flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/trending") view=TrendingPage />
                        <Route path=path!("/search") view=SearchPage />
                        <Route path=path!("/related") view=RelatedPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-700 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-500 transition-colors"
                >
                    "Back to Cine-AI"
                </a>
            </div>
        </div>
    }
}

/// HTML document used by the server to render every route
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options />
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
