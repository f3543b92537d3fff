pub mod branch;
pub mod commit;
pub mod issue;
pub mod store;
pub mod tab;

// Re-exports for convenience
pub use branch::*;
pub use commit::*;
pub use issue::*;
pub use store::*;
pub use tab::*;
