pub mod commands;
pub mod counter;
pub mod live_stats;
pub mod navigation;
pub mod page;
pub mod press;
pub mod reveal;
pub mod scheduler;
pub mod tabs;
pub mod terminal;

pub use commands::*;
pub use counter::*;
pub use live_stats::*;
pub use navigation::*;
pub use page::*;
pub use press::*;
pub use reveal::*;
pub use scheduler::*;
pub use tabs::*;
pub use terminal::*;
