//! Reusable UI components

mod banner;
mod button;
mod tooltip;

pub use banner::render_banner;
pub use button::render_submit_button;
pub use tooltip::render_tooltip;
