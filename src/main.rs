//! SCRAPBOOK: a hinged 3D photo book
//!
//! Covers and pages swing about the spine one at a time:
//! - Next/previous via keyboard or the on-screen buttons
//! - Page sides textured with user photos, cropped to fill the page
//! - Book scales with the window and turns sideways in portrait

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod book;
mod config;
mod input;
mod photo;
mod render;
mod ui;

use app::{App, Flow};
use config::{ViewerConfig, DEFAULT_CONFIG_PATH};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Scrapbook v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        sample_count: 4,
        ..Default::default()
    }
}

/// Config path: first CLI argument on native, otherwise the default
fn config_path() -> std::path::PathBuf {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(arg) = std::env::args().nth(1) {
            return std::path::PathBuf::from(arg);
        }
    }
    std::path::PathBuf::from(DEFAULT_CONFIG_PATH)
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = ViewerConfig::load_or_default(&config_path());
    println!(
        "Book: {} pages, speed {}, epsilon {}",
        config.page_count, config.flip_speed, config.snap_epsilon
    );

    let mut app = App::new(config);

    if let Some(result) = photo::load_bundled(app.state.config.page_count).await {
        app.set_photos(result);
    }

    println!("=== SCRAPBOOK ===");

    loop {
        match app.update(get_frame_time()) {
            Flow::Continue => {}
            Flow::OpenPhotos => {
                #[cfg(not(target_arch = "wasm32"))]
                {
                    if let Some(result) = photo::pick_photos(app.state.config.page_count) {
                        app.set_photos(result);
                    }
                }
                #[cfg(target_arch = "wasm32")]
                println!("Photo picker is not available on web; photos come from assets/photos");
            }
            Flow::Quit => {
                // Browser tabs close themselves
                if cfg!(not(target_arch = "wasm32")) {
                    break;
                }
            }
        }

        app.draw();
        next_frame().await;
    }
}
