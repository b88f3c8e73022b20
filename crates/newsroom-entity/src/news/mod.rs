//! News domain entities.

pub mod model;

pub use model::{NewsDraft, NewsItem, NewsPatch};
