//! HTTP front end of the Portal redirect service.
//!
//! Wires the mapping store, the layered loader and the fallback chain into
//! an axum router.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod seed;
pub mod startup;
pub mod state;

pub use app::App;
pub use cli::Cli;
pub use state::AppState;
