// web_app/pages/related.rs - "Similar movies" lookup by title

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::error::FetchError;
use crate::web_app::model::*;
use crate::web_app::pages::report;
use crate::web_app::server_fns::similar;
use crate::web_app::session::{RelatedSession, Selection};

#[component]
pub fn RelatedPage() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let session = RwSignal::new(RelatedSession::default());
    let selection = RwSignal::new(Selection::default());

    let on_submit = Callback::new(move |()| {
        let text = input.get_untracked();
        let Some(token) = session.try_update(|s| s.begin(&text)).flatten() else {
            return;
        };
        let request = session.with_untracked(|s| s.request());

        spawn_local(async move {
            let outcome = similar(request.title).await.map_err(FetchError::from);
            if let Some(completion) = session.try_update(|s| s.complete(token, outcome)) {
                report("Related", &completion);
            }
        });
    });

    let loading = Signal::derive(move || session.with(|s| s.loading));
    let results = Signal::derive(move || session.with(|s| s.results.clone()));
    let source = Signal::derive(move || session.with(|s| s.source_movie.clone()));

    let on_select = Callback::new(move |movie: MovieResult| {
        selection.update(|s| s.select(movie));
    });

    view! {
        <div class="app-container max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-12">
                <h1 class="text-5xl font-extrabold text-slate-100 mb-3">"🔗 Movie Chain"</h1>
                <p class="subtitle text-lg text-slate-400">
                    "Type a movie you love. We'll find its \"Soulmates.\""
                </p>
            </div>

            <SearchBar
                value=input
                loading=loading
                on_submit=on_submit
                placeholder="e.g. The Dark Knight..."
                button_label="Find Matches"
                loading_label="Analyzing..."
            />

            {move || {
                source.get().map(|movie| view! {
                    <InsightBox
                        icon="🎬"
                        heading=format!("Based on: {}", movie.title)
                        body=movie.overview
                        accent="border-purple-500"
                    />
                })
            }}

            <MovieGrid
                movies=results
                badge=BadgeKind::Match
                on_select=on_select
                show_empty=Signal::derive(move || source.with(|s| s.is_some()))
            />

            <MovieModal selection=selection />
        </div>
    }
}
