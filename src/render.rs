//! Book rendering
//!
//! Draws the book with macroquad's 3D pipeline. Geometry comes from the
//! hinge angles each frame; nothing here keeps animation state. There is
//! no lighting in the pipeline, so faces are shaded per quad from a fixed
//! key light.

use std::collections::HashMap;

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;

use crate::book::{photo_quad, BookLayout, HingeId, PageFlipController, Quad, Side, Slab};
use crate::photo::{Album, CoverFit, PhotoSlot};

pub const BACKGROUND_COLOR: Color = Color::new(0.78, 0.80, 0.86, 1.0);
const PAPER_COLOR: Color = Color::new(0.96, 0.94, 0.88, 1.0);
const COVER_COLOR: Color = Color::new(0.86, 0.82, 0.74, 1.0);
const EDGE_COLOR: Color = Color::new(0.80, 0.77, 0.70, 1.0);

/// Camera distance from the spine
const CAMERA_Z: f32 = 3.0;
const CAMERA_FOVY_DEGREES: f32 = 75.0;

/// Direction towards the key light
const KEY_LIGHT: Vec3 = Vec3::new(2.0, 4.0, 5.0);
const AMBIENT: f32 = 0.55;
const DIFFUSE: f32 = 0.45;

/// Plane UVs (V up) in quad corner order
const PLANE_UVS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

/// Brightness of a face with unit normal `normal`
pub fn shade(normal: Vec3) -> f32 {
    let diffuse = normal.dot(KEY_LIGHT.normalize()).max(0.0);
    (AMBIENT + DIFFUSE * diffuse).min(1.0)
}

/// Texture coordinates (macroquad convention, V down) for a photo quad
pub fn photo_uvs(fit: &CoverFit) -> [Vec2; 4] {
    PLANE_UVS.map(|(u, v)| {
        let (tu, tv) = fit.transform_uv(u, v);
        vec2(tu, 1.0 - tv)
    })
}

fn quad_normal(quad: &Quad) -> Vec3 {
    let [a, b, _, d] = quad.corners;
    (b - a).cross(d - a).normalize_or_zero()
}

fn shaded(color: Color, quad: &Quad) -> Color {
    let s = shade(quad_normal(quad));
    Color::new(color.r * s, color.g * s, color.b * s, color.a)
}

fn draw_quad(quad: &Quad, uvs: [Vec2; 4], color: Color, texture: Option<&Texture2D>) {
    let vertices = quad
        .corners
        .iter()
        .zip(uvs)
        .map(|(p, uv)| Vertex::new(p.x, p.y, p.z, uv.x, uv.y, color))
        .collect();

    draw_mesh(&Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
        texture: texture.cloned(),
    });
}

/// GPU textures for the album's photos
pub struct BookRenderer {
    photos: HashMap<PhotoSlot, (Texture2D, CoverFit)>,
}

impl BookRenderer {
    pub fn new() -> Self {
        Self {
            photos: HashMap::new(),
        }
    }

    /// Upload every photo in the album, replacing any previous set
    pub fn set_album(&mut self, album: &Album) {
        self.photos.clear();
        for photo in album.photos() {
            let (Ok(w), Ok(h)) = (u16::try_from(photo.width), u16::try_from(photo.height)) else {
                eprintln!("Skipping {}: {}x{} is too large for a texture", photo.name, photo.width, photo.height);
                continue;
            };
            let texture = Texture2D::from_rgba8(w, h, &photo.rgba);
            texture.set_filter(FilterMode::Linear);
            self.photos.insert(photo.slot, (texture, photo.fit));
        }
    }

    /// Draw the whole book. Leaves the default 2D camera active on return.
    pub fn draw(&self, controller: &PageFlipController, layout: BookLayout) {
        set_camera(&Camera3D {
            position: vec3(0.0, 0.0, CAMERA_Z),
            target: vec3(0.0, 0.0, 0.0),
            up: vec3(0.0, 1.0, 0.0),
            fovy: CAMERA_FOVY_DEGREES.to_radians(),
            ..Default::default()
        });

        let place = |q: Quad| q.map(|p| layout.apply(p));

        for (id, hinge) in controller.hinges() {
            let slab = Slab::for_hinge(id);
            let color = match id {
                HingeId::Page(_) => PAPER_COLOR,
                HingeId::FrontCover | HingeId::BackCover => COVER_COLOR,
            };

            for side in [Side::Front, Side::Back] {
                let face = place(slab.face(side, hinge.angle));
                draw_quad(&face, [Vec2::ZERO; 4], shaded(color, &face), None);
            }
            for edge in slab.edges(hinge.angle) {
                let edge = place(edge);
                draw_quad(&edge, [Vec2::ZERO; 4], shaded(EDGE_COLOR, &edge), None);
            }

            if let HingeId::Page(sheet) = id {
                for side in [Side::Front, Side::Back] {
                    let slot = PhotoSlot { sheet, side };
                    if let Some((texture, fit)) = self.photos.get(&slot) {
                        let quad = place(photo_quad(sheet, side, hinge.angle));
                        draw_quad(&quad, photo_uvs(fit), shaded(WHITE, &quad), Some(texture));
                    }
                }
            }
        }

        set_default_camera();
    }
}

impl Default for BookRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_range() {
        assert!((shade(KEY_LIGHT.normalize()) - 1.0).abs() < 1e-6);
        assert!((shade(-KEY_LIGHT.normalize()) - AMBIENT).abs() < 1e-6);
        assert!(shade(Vec3::Z) > shade(Vec3::NEG_Z));
    }

    #[test]
    fn test_identity_photo_uvs_flip_v() {
        let uvs = photo_uvs(&CoverFit::IDENTITY);
        // Bottom-left of the plane is the bottom-left of the image
        assert_eq!(uvs[0], vec2(0.0, 1.0));
        assert_eq!(uvs[2], vec2(1.0, 0.0));
    }

    #[test]
    fn test_cropped_photo_uvs_stay_inside_texture() {
        let fit = CoverFit::compute(1000, 1000, crate::book::PAGE_ASPECT);
        for uv in photo_uvs(&fit) {
            assert!((0.0..=1.0).contains(&uv.x), "{:?}", uv);
            assert!((0.0..=1.0).contains(&uv.y), "{:?}", uv);
        }
    }

    #[test]
    fn test_closed_front_cover_normals() {
        let face = Slab::for_hinge(HingeId::FrontCover).face(Side::Front, std::f32::consts::PI);
        // Closed front cover shows its outside (local back face) to the camera;
        // its local front face points away
        assert!(quad_normal(&face).z < 0.0);
        let outside = Slab::for_hinge(HingeId::FrontCover).face(Side::Back, std::f32::consts::PI);
        assert!(quad_normal(&outside).z > 0.0);
    }
}
