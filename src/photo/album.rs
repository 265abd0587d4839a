//! Photo album
//!
//! Assigns chosen photos to page sides and decodes them. Photo `i` in
//! selection order lands on sheet `i / 2`: even indices on the front,
//! odd on the back. Only the first two photos per page are used.

use std::path::{Path, PathBuf};

use super::fit::CoverFit;
use crate::book::{Side, PAGE_ASPECT};

/// Longest texture edge uploaded to the GPU
pub const MAX_TEXTURE_SIZE: u32 = 2048;

/// Where a photo goes in the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoSlot {
    pub sheet: usize,
    pub side: Side,
}

impl PhotoSlot {
    pub fn for_index(index: usize) -> Self {
        Self {
            sheet: index / 2,
            side: if index % 2 == 0 { Side::Front } else { Side::Back },
        }
    }
}

/// Error type for photo loading
#[derive(Debug)]
pub enum PhotoError {
    NotEnoughPhotos { required: usize, got: usize },
    IoError(std::io::Error),
    DecodeError { name: String, message: String },
}

impl From<std::io::Error> for PhotoError {
    fn from(e: std::io::Error) -> Self {
        PhotoError::IoError(e)
    }
}

impl std::fmt::Display for PhotoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoError::NotEnoughPhotos { required, got } => {
                write!(f, "Please select at least {} photos ({} selected)", required, got)
            }
            PhotoError::IoError(e) => write!(f, "IO error: {}", e),
            PhotoError::DecodeError { name, message } => {
                write!(f, "Failed to decode {}: {}", name, message)
            }
        }
    }
}

impl std::error::Error for PhotoError {}

/// Two photos per page, front and back
pub fn required_photos(page_count: usize) -> usize {
    page_count * 2
}

/// Slots for the first `required_photos(page_count)` of `count` photos
pub fn assign_photos(count: usize, page_count: usize) -> Result<Vec<PhotoSlot>, PhotoError> {
    let required = required_photos(page_count);
    if count < required {
        return Err(PhotoError::NotEnoughPhotos { required, got: count });
    }
    Ok((0..required).map(PhotoSlot::for_index).collect())
}

/// A decoded photo, ready to upload as a texture
#[derive(Debug, Clone)]
pub struct Photo {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, top row first
    pub rgba: Vec<u8>,
    pub fit: CoverFit,
    pub slot: PhotoSlot,
}

impl Photo {
    /// Decode an encoded image (PNG/JPEG/BMP)
    pub fn decode(name: &str, bytes: &[u8], slot: PhotoSlot) -> Result<Self, PhotoError> {
        use image::GenericImageView;

        let img = image::load_from_memory(bytes).map_err(|e| PhotoError::DecodeError {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        // Fit from the original size; downscaling only approximates the aspect
        let (src_w, src_h) = img.dimensions();
        let fit = CoverFit::compute(src_w, src_h, PAGE_ASPECT);
        let img = if src_w > MAX_TEXTURE_SIZE || src_h > MAX_TEXTURE_SIZE {
            img.resize(MAX_TEXTURE_SIZE, MAX_TEXTURE_SIZE, image::imageops::FilterType::Triangle)
        } else {
            img
        };
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            name: name.to_string(),
            width,
            height,
            rgba: rgba.into_raw(),
            fit,
            slot,
        })
    }
}

/// All photos for one book
#[derive(Debug, Clone, Default)]
pub struct Album {
    photos: Vec<Photo>,
}

impl Album {
    /// Decode `(name, bytes)` pairs in selection order
    pub fn from_sources(sources: Vec<(String, Vec<u8>)>, page_count: usize) -> Result<Self, PhotoError> {
        let slots = assign_photos(sources.len(), page_count)?;
        let photos = sources
            .iter()
            .zip(slots)
            .map(|((name, bytes), slot)| Photo::decode(name, bytes, slot))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { photos })
    }

    /// Read and decode files from disk
    pub fn load(paths: &[PathBuf], page_count: usize) -> Result<Self, PhotoError> {
        // Check the count before reading anything
        assign_photos(paths.len(), page_count)?;

        let sources = paths
            .iter()
            .take(required_photos(page_count))
            .map(|path| -> Result<(String, Vec<u8>), PhotoError> {
                Ok((display_name(path), std::fs::read(path)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_sources(sources, page_count)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Every side of every page has a photo
    pub fn is_complete(&self, page_count: usize) -> bool {
        self.photos.len() >= required_photos(page_count)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
