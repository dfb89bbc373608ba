//! Web layer for the flight path tracker.
//!
//! Provides the `/calculate` endpoint and a static health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
