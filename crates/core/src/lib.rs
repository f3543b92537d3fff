//! GitDeck Core - page logic with no terminal dependencies
//!
//! This crate holds the sample data, the markup renderer, the cooperative
//! timer scheduler and the page components (tabs, counters, scroll reveal,
//! terminal overlay, navigation). Everything talks to the page through the
//! [`ports::Document`] trait, so the binary decides how a page is drawn.

pub mod app;
pub mod dom;
pub mod domain;
pub mod error;
pub mod format;
pub mod ports;
pub mod render;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
