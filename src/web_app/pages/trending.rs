// web_app/pages/trending.rs - Trending movies, loaded once on mount
//
// No loading indicator and no alert: a failed fetch is logged to the
// console and leaves the grid empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::error::FetchError;
use crate::web_app::model::*;
use crate::web_app::pages::report;
use crate::web_app::server_fns::trending;
use crate::web_app::session::{Selection, TrendingSession};

#[component]
pub fn TrendingPage() -> impl IntoView {
    let session = RwSignal::new(TrendingSession::default());
    let selection = RwSignal::new(Selection::default());

    // Effects only run in the browser, so the list is fetched after hydration
    Effect::new(move || {
        let Some(token) = session.try_update(|s| s.begin()) else {
            return;
        };
        spawn_local(async move {
            let outcome = trending().await.map_err(FetchError::from);
            if let Some(completion) = session.try_update(|s| s.complete(token, outcome)) {
                report("Trending", &completion);
            }
        });
    });

    let results = Signal::derive(move || session.with(|s| s.results.clone()));

    let on_select = Callback::new(move |movie: MovieResult| {
        selection.update(|s| s.select(movie));
    });

    view! {
        <div class="app-container max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-12">
                <h1 class="text-5xl font-extrabold text-slate-100 mb-3">"🔥 Trending Now"</h1>
                <p class="subtitle text-lg text-slate-400">
                    "The top 10 movies the world is watching this week."
                </p>
            </div>

            <MovieGrid
                movies=results
                badge=BadgeKind::Rating
                on_select=on_select
                show_empty=false
            />

            <MovieModal selection=selection />
        </div>
    }
}
