//! Application state module

mod app_state;
mod content;
mod nav;
mod page;
mod reveal;

pub use app_state::*;
pub use content::*;
pub use nav::*;
pub use page::*;
pub use reveal::*;
