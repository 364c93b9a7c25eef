//! Input handling module
//!
//! Raw keyboard/cursor/scroll state tracking, edge detection for
//! one-shot toggles, and the key-to-action binding table.

mod bindings;
mod edge;
mod state;

pub use bindings::{KeyBindings, ViewerAction};
pub use edge::{Edge, KeyEdge};
pub use state::InputState;
