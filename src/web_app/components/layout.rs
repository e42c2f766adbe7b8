// web_app/components/layout.rs - Navigation shell around every page

use leptos::prelude::*;

/// Navigation links as (href, label)
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/trending", "🔥 Trending"),
    ("/search", "AI Search"),
    ("/related", "Similar Movies"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar sticky top-0 z-40 bg-slate-950/90 backdrop-blur border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="nav-brand text-xl font-bold text-slate-100">"✨ Cine-AI"</a>
                <div class="nav-links flex items-center gap-6 text-slate-300">
                    {NAV_LINKS.into_iter().map(|(href, label)| view! {
                        <a href=href class="hover:text-white transition-colors">{label}</a>
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer border-t border-slate-800 mt-12 py-8 text-center text-slate-500 text-sm">
            <p>"Built with 🦀 Leptos, Actix & a vector-search backend."</p>
            <div class="socials mt-2">
                <a href="https://www.themoviedb.org" target="_blank" rel="noopener" class="hover:text-slate-300">
                    "Movie data from TMDB"
                </a>
            </div>
        </footer>
    }
}
