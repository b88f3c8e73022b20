//! # newsroom-api
//!
//! The HTTP surface of the newsroom backend: DTOs, error-to-status
//! mapping, cookie-session extractors, handlers, and the router.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
