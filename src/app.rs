//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the session together
//! with presentation state: list cursor, folder browser and pending notices.

mod model;

pub use model::*;
