pub mod bookmarks;
pub mod protocol;
pub mod reference;
pub mod rest;
pub mod search;
pub mod settings;
pub mod state;

// Re-export the router builder to make it easily accessible
// to the binary that serves it and to the integration tests.
pub use rest::{api_router, ApiDoc};
pub use state::AppState;
