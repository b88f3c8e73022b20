//! # newsroom-auth
//!
//! Authentication and authorization for the newsroom backend: Argon2id
//! password hashing, the opaque-token session layer, and the access
//! policy that gates every write against the partition it targets.

pub mod password;
pub mod policy;
pub mod session;

pub use password::PasswordHasher;
pub use policy::AccessPolicy;
pub use session::{LoginOutcome, SessionManager, SessionStore};
