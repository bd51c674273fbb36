//! Folder scanning: turns a directory into the ordered list of playable tracks.

mod display;
mod model;
mod scan;

pub use model::Track;
pub use scan::scan;
