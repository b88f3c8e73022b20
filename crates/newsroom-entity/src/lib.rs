//! # newsroom-entity
//!
//! Domain entity models for Meridian Newsroom. Every struct in this crate
//! represents a record in one of the durable stores or a domain value
//! object. All persisted entities derive `Debug`, `Clone`, `Serialize`,
//! and `Deserialize`; the wire format is camelCase to match the persisted
//! document and the companion frontend.

pub mod account;
pub mod news;
pub mod region;
pub mod session;

pub use account::{Account, AccountRole, AccountSummary, AccountUpdate};
pub use news::{NewsDraft, NewsItem, NewsPatch};
pub use region::Region;
pub use session::{Identity, Session};
