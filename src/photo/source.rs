//! Where photos come from
//!
//! Native: a file dialog, or the bundled `assets/photos` directory.
//! WASM: the bundled photos listed in `assets/photos/manifest.txt`
//! (generated by build.rs, since WASM can't enumerate directories).

use std::path::{Path, PathBuf};

use super::{Album, PhotoError};

pub const BUNDLED_PHOTOS_DIR: &str = "assets/photos";
#[cfg(any(target_arch = "wasm32", test))]
pub const MANIFEST_NAME: &str = "manifest.txt";
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

pub fn is_photo_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_ascii_lowercase();
            PHOTO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// File names listed in a manifest, in order. Blank lines are skipped.
#[cfg(any(target_arch = "wasm32", test))]
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Image files in `dir`, sorted by file name
pub fn list_photos(dir: &Path) -> Result<Vec<PathBuf>, PhotoError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_photo_path(p))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load the photos shipped in `assets/photos`, if there is such a directory
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_bundled(page_count: usize) -> Option<Result<Album, PhotoError>> {
    let dir = Path::new(BUNDLED_PHOTOS_DIR);
    if !dir.is_dir() {
        return None;
    }
    let paths = match list_photos(dir) {
        Ok(paths) if paths.is_empty() => return None,
        Ok(paths) => paths,
        Err(e) => return Some(Err(e)),
    };
    Some(Album::load(&paths, page_count))
}

#[cfg(target_arch = "wasm32")]
pub async fn load_bundled(page_count: usize) -> Option<Result<Album, PhotoError>> {
    let manifest_path = format!("{}/{}", BUNDLED_PHOTOS_DIR, MANIFEST_NAME);
    let manifest = macroquad::file::load_string(&manifest_path).await.ok()?;
    let names = parse_manifest(&manifest);
    if names.is_empty() {
        return None;
    }

    let mut sources = Vec::new();
    for name in names.into_iter().take(super::required_photos(page_count)) {
        let path = format!("{}/{}", BUNDLED_PHOTOS_DIR, name);
        match macroquad::file::load_file(&path).await {
            Ok(bytes) => sources.push((name, bytes)),
            Err(e) => return Some(Err(PhotoError::IoError(std::io::Error::other(format!("{}: {}", path, e))))),
        }
    }
    Some(Album::from_sources(sources, page_count))
}

/// Ask the user for photos. None if the dialog was cancelled.
#[cfg(not(target_arch = "wasm32"))]
pub fn pick_photos(page_count: usize) -> Option<Result<Album, PhotoError>> {
    let mut paths = rfd::FileDialog::new()
        .set_title(format!("Choose {} photos", super::required_photos(page_count)))
        .add_filter("Images", PHOTO_EXTENSIONS)
        .pick_files()?;
    // Dialog order is platform-dependent; selection order is file name order
    paths.sort();
    Some(Album::load(&paths, page_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_manifest() {
        let names = parse_manifest("a.png\n\n  b.jpg  \nc.jpeg\n");
        assert_eq!(names, vec!["a.png", "b.jpg", "c.jpeg"]);
    }

    #[test]
    fn test_is_photo_path() {
        assert!(is_photo_path(Path::new("x/IMG_001.JPG")));
        assert!(is_photo_path(Path::new("scan.bmp")));
        assert!(!is_photo_path(Path::new("notes.txt")));
        assert!(!is_photo_path(Path::new("README")));
    }

    #[test]
    fn test_list_photos_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.png", "a.jpg", MANIFEST_NAME, "c.JPEG"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("d.png")).unwrap();

        let names: Vec<String> = list_photos(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.JPEG"]);
    }
}
