// web_app/components/movie.rs - Movie display components
//
// - MovieCard: one result in the grid
// - MovieGrid: the result grid with its empty state
// - MovieDetail: body of the detail overlay
// - MovieModal: overlay driven by a page's Selection

use leptos::prelude::*;

use crate::web_app::components::common::ModalWrapper;
use crate::web_app::model::{BadgeKind, MovieResult};
use crate::web_app::session::{ModalEvent, Selection};

fn badge_class(badge: BadgeKind) -> &'static str {
    match badge {
        BadgeKind::Rating => "score-badge absolute top-3 right-3 px-2.5 py-1 rounded-lg text-sm font-bold bg-orange-400 text-black",
        BadgeKind::Score | BadgeKind::Match => "score-badge absolute top-3 right-3 px-2.5 py-1 rounded-lg text-sm font-bold bg-emerald-400/90 text-black",
    }
}

/// Stagger for the card fade-in
fn animation_delay(index: usize) -> String {
    format!("animation-delay: {}ms", index * 100)
}

/// Key for one grid entry; duplicate titles still get distinct keys
fn grid_key((index, movie): &(usize, MovieResult)) -> (usize, String) {
    (*index, movie.title.clone())
}

/// Movie card component
///
/// Poster, title, shortened overview and the page's badge. The whole card
/// is clickable.
#[component]
pub fn MovieCard(
    movie: MovieResult,
    /// Position in the grid, used for the fade-in stagger
    index: usize,
    badge: BadgeKind,
    on_select: Callback<MovieResult>,
) -> impl IntoView {
    let badge_label = badge.label(&movie);
    let preview = movie.overview_preview();
    let title = movie.title.clone();
    let poster = movie.poster_path.clone();

    view! {
        <div
            class="card animate-fade-in bg-slate-800 rounded-2xl overflow-hidden shadow-lg cursor-pointer \
                   hover:-translate-y-1 hover:shadow-2xl transition-all"
            style=animation_delay(index)
            on:click=move |_| on_select.run(movie.clone())
        >
            <div class="poster-wrapper relative aspect-[2/3] bg-slate-700">
                <img src=poster alt=title.clone() class="w-full h-full object-cover" loading="lazy" />
                {badge_label.map(|label| view! { <div class=badge_class(badge)>{label}</div> })}
            </div>
            <div class="card-content p-4">
                <h3 class="text-lg font-bold text-slate-100 mb-2">{title}</h3>
                <p class="text-sm text-slate-400 leading-relaxed">{preview}</p>
            </div>
        </div>
    }
}

/// Results grid component
///
/// `show_empty` turns on the "no matches" message when the list is empty;
/// pages keep it off until a search has actually completed.
#[component]
pub fn MovieGrid(
    #[prop(into)]
    movies: Signal<Vec<MovieResult>>,
    badge: BadgeKind,
    on_select: Callback<MovieResult>,
    #[prop(into)]
    show_empty: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            {move || {
                (show_empty.get() && movies.with(|m| m.is_empty())).then(|| view! {
                    <div class="text-center py-16 rounded-2xl border border-dashed border-slate-700">
                        <div class="text-6xl mb-4">"🎞️"</div>
                        <h3 class="text-xl font-bold text-slate-200 mb-2">"No movies found"</h3>
                        <p class="text-slate-400">"Try describing it a different way."</p>
                    </div>
                })
            }}
            <div class="movie-grid grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                <For
                    each=move || movies.get().into_iter().enumerate()
                    key=grid_key
                    children=move |(index, movie)| {
                        view! {
                            <MovieCard movie=movie index=index badge=badge on_select=on_select />
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Full detail of one movie, shown inside the overlay
#[component]
pub fn MovieDetail(movie: MovieResult) -> impl IntoView {
    let release = movie.release_date_label().to_string();
    let rating = movie.rating_label();
    let match_label = movie.match_label();

    view! {
        <div class="flex flex-col md:flex-row">
            <img
                class="modal-poster w-full md:w-80 object-cover md:rounded-l-2xl"
                src=movie.poster_path.clone()
                alt=movie.title.clone()
            />
            <div class="modal-info p-8 flex-1">
                <h2 class="text-3xl font-bold mt-0 mb-4">{movie.title.clone()}</h2>
                <div class="meta-tags flex flex-wrap gap-2 mb-6">
                    <span class="tag px-3 py-1 rounded-full bg-slate-800 text-sm">"📅 " {release}</span>
                    {rating.map(|r| view! {
                        <span class="tag px-3 py-1 rounded-full bg-slate-800 text-sm">"⭐ " {r}</span>
                    })}
                    {match_label.map(|m| view! {
                        <span class="tag px-3 py-1 rounded-full bg-emerald-400/10 text-emerald-400 text-sm">{m}</span>
                    })}
                </div>
                <p class="text-lg leading-8 text-slate-300">{movie.overview.clone()}</p>
            </div>
        </div>
    }
}

/// Detail overlay bound to a page's selection
#[component]
pub fn MovieModal(selection: RwSignal<Selection>) -> impl IntoView {
    let on_event = Callback::new(move |event: ModalEvent| {
        // Only notify when the overlay actually closed
        selection.maybe_update(|s| s.handle(event));
    });

    view! {
        {move || {
            selection.with(|s| s.selected().cloned()).map(|movie| view! {
                <ModalWrapper on_event=on_event>
                    <MovieDetail movie=movie />
                </ModalWrapper>
            })
        }}
    }
}
