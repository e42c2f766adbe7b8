// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

use crate::web_app::pages::search::SearchPanel;

/// Call to action under the hero copy as (href, label)
const CALL_TO_ACTION: (&str, &str) = ("/search", "Find a Movie 🚀");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero-section max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="hero-content text-center mb-16">
                <h1 class="text-6xl font-extrabold text-slate-100 leading-tight mb-6">
                    "Stop Scrolling." <br />
                    "Start " <span class="highlight text-indigo-400">"Watching."</span>
                </h1>
                <p class="hero-sub text-xl text-slate-400 max-w-2xl mx-auto">
                    "Powered by " <b>"Artificial Intelligence"</b> " and " <b>"Vector Search"</b> ". "
                    "Don't search by genre, describe exactly what you want to feel."
                </p>
                <a
                    href=CALL_TO_ACTION.0
                    class="cta-button inline-block mt-8 px-8 py-3 bg-indigo-600 text-white rounded-xl \
                           font-semibold shadow-md hover:bg-indigo-500 transition-all"
                >
                    {CALL_TO_ACTION.1}
                </a>
            </div>
            <SearchPanel />
        </div>
    }
}
