//! Integration tests driving the full router end to end.

mod helpers;

mod auth_test;
mod news_test;
