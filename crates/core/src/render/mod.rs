pub mod content;
pub mod markup;

pub use content::*;
pub use markup::*;
