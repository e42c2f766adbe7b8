// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - session.rs: Per-page request/response state machines (shared)
// - error.rs, config.rs: Error types and server configuration (shared)
// - api/: HTTP client for the recommendation service (server only)
// - server_fns.rs: Server function declarations (both client and server)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod config;
pub mod error;
pub mod model;
pub mod session;

// Outbound HTTP to the recommendation service (server side only)
#[cfg(feature = "client")]
pub mod api;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
