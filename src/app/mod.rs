//! Application shell

mod config;
mod runner;

pub use config::ViewerConfig;
pub use runner::App;
