//! Viewer configuration

use std::path::PathBuf;

/// Viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Directory holding the scene textures
    pub texture_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: String::from("Tabletop Viewer"),
            width: 1000,
            height: 800,
            vsync: true,
            texture_dir: PathBuf::from("textures"),
        }
    }
}

impl ViewerConfig {
    /// Create a new config with a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set window dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable VSync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Set the texture directory
    pub fn with_texture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.texture_dir = dir.into();
        self
    }
}
