// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, InsightBox, ModalWrapper)
// - search.rs: Search input (SearchBar)
// - movie.rs: Movie display components (MovieCard, MovieGrid, MovieModal)
// - layout.rs: Navigation shell (Navbar, Footer)

pub mod common;
pub mod search;
pub mod movie;
pub mod layout;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use movie::*;
pub use layout::*;
