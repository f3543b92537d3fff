pub mod document;
pub mod time;

// Re-exports
pub use document::*;
pub use time::*;
