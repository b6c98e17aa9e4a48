//! Dairo HTTP server: routes, error mapping and process bootstrap.

pub mod app;
pub mod error;
pub mod logging;
pub mod routes;

pub use app::AppState;
pub use routes::build_router;
