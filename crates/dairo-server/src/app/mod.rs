pub mod bootstrap;
mod state;

pub use state::AppState;
