//! Tabletop still life viewer

use tabletop_viewer::prelude::*;

fn main() {
    let config = ViewerConfig::default()
        .with_title("Tabletop Viewer")
        .with_size(1000, 800)
        .with_vsync(true);

    let app = App::new(config);

    if let Err(e) = app.run() {
        eprintln!("Viewer error: {}", e);
    }
}
