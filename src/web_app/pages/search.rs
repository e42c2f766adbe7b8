// web_app/pages/search.rs - Description search page
//
// SearchPanel is the controller for `/recommend`; the Home page embeds the
// same panel under its hero.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::error::FetchError;
use crate::web_app::model::*;
use crate::web_app::pages::report;
use crate::web_app::server_fns::recommend;
use crate::web_app::session::{SearchSession, Selection};

/// Search input, explanation box, result grid and detail overlay
#[component]
pub fn SearchPanel() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let session = RwSignal::new(SearchSession::default());
    let selection = RwSignal::new(Selection::default());

    let on_submit = Callback::new(move |()| {
        let text = input.get_untracked();
        let Some(token) = session.try_update(|s| s.begin(&text)).flatten() else {
            return;
        };
        let request = session.with_untracked(|s| s.request());

        spawn_local(async move {
            let outcome = recommend(request.query, request.limit)
                .await
                .map_err(FetchError::from);
            if let Some(completion) = session.try_update(|s| s.complete(token, outcome)) {
                report("Search", &completion);
            }
        });
    });

    let loading = Signal::derive(move || session.with(|s| s.loading));
    let results = Signal::derive(move || session.with(|s| s.results.clone()));
    let explanation = Signal::derive(move || session.with(|s| s.explanation.clone()));
    let show_empty = Signal::derive(move || session.with(|s| s.searched && !s.loading));

    let on_select = Callback::new(move |movie: MovieResult| {
        selection.update(|s| s.select(movie));
    });

    view! {
        <section class="w-full">
            <SearchBar
                value=input
                loading=loading
                on_submit=on_submit
                placeholder="e.g., A cyberpunk detective story..."
                button_label="🚀 Explore"
                loading_label="🔮..."
            />

            <Show when=move || loading.get()>
                <Loading message="Asking the movie oracle..." />
            </Show>

            {move || {
                let text = explanation.get();
                (!text.is_empty()).then(|| view! {
                    <InsightBox icon="🤖" heading="AI Insight" body=text />
                })
            }}

            <MovieGrid
                movies=results
                badge=BadgeKind::Score
                on_select=on_select
                show_empty=show_empty
            />

            <MovieModal selection=selection />
        </section>
    }
}

/// Search page component
#[component]
pub fn SearchPage() -> impl IntoView {
    view! {
        <div class="app-container max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-12">
                <h1 class="text-5xl font-extrabold text-slate-100 mb-3">"✨ Cine-AI"</h1>
                <p class="subtitle text-lg text-slate-400">"Describe a vibe, a plot, or a feeling."</p>
            </div>
            <SearchPanel />
        </div>
    }
}
