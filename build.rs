//! Build script to generate the photo manifest for WASM builds
//!
//! Scans assets/photos/ and lists every image file, since WASM can't
//! enumerate directories at runtime.

use std::fs;
use std::io::Write;
use std::path::Path;

const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

fn main() {
    println!("cargo:rerun-if-changed=assets/photos");

    let photos_dir = Path::new("assets/photos");
    let manifest_path = photos_dir.join("manifest.txt");

    if !photos_dir.exists() {
        return;
    }

    let mut photos: Vec<_> = fs::read_dir(photos_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_ascii_lowercase();
                    PHOTO_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
        })
        .collect();

    // Selection order is filename order
    photos.sort_by_key(|e| e.file_name());

    let mut manifest = String::new();
    for entry in photos {
        manifest.push_str(&entry.file_name().to_string_lossy());
        manifest.push('\n');
    }

    let mut file = fs::File::create(manifest_path).unwrap();
    file.write_all(manifest.as_bytes()).unwrap();
}
