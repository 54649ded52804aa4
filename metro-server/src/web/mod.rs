//! Web layer: axum routes, DTOs, and page templates.

mod dto;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
