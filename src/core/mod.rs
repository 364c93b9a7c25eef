//! Core module
//!
//! Frame timing shared by the update loop.

mod clock;

pub use clock::FrameClock;
