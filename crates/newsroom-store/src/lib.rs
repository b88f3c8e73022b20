//! # newsroom-store
//!
//! The two durable stores of the newsroom backend: the partitioned news
//! store and the account (credential) store.
//!
//! Both hold their state in memory as the sole source of truth and mirror
//! it to a flat file after every mutation. The files are read back exactly
//! once, at startup; persistence failures are logged and swallowed so the
//! process keeps serving from memory.

pub mod accounts;
pub mod document;
pub mod news;

pub use accounts::AccountStore;
pub use document::{NewsDocument, PartitionData};
pub use news::NewsStore;
