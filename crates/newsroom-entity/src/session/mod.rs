//! Session domain entities.

pub mod model;

pub use model::{Identity, Session};
