//! Headless Chromium orchestration over CDP.
//!
//! The upstream JSON endpoint rejects plain HTTP clients: it requires the
//! session cookies the character page sets. A lookup therefore launches a
//! browser, visits that page, and issues the fetch from inside it. Each
//! lookup gets its own session, closed on every exit path.

pub mod detect;
pub mod error;
pub mod fetcher;
pub mod session;
pub mod types;

pub use {
    error::BrowserError,
    fetcher::{BrowserFetcher, CharacterFetcher},
    session::BrowserSession,
    types::{LookupOutcome, PageFetch},
};
