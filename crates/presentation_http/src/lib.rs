//! Korea Weather Hub HTTP presentation layer
//!
//! Serves the HTML dashboard and a small JSON API over the dashboard service.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod view;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
