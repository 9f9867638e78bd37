//! Web layer for the bike-share recommender.
//!
//! Provides HTTP endpoints for listing stations and requesting
//! recommendations. Handlers only translate query parameters into engine
//! calls and engine results into JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
