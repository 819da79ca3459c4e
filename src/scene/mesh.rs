//! Triangle mesh generation for a [`SceneFrame`].
//!
//! Each cubie is a dark body box with a slightly raised, inset sticker quad
//! on every face that carries a color.

use glam::{Mat4, Vec3};

use super::{CubieInstance, SceneFrame};
use crate::cube::FaceId;
use crate::options::DisplayOptions;

/// Lift of stickers above the body surface, in cubie-edge units.
const STICKER_LIFT: f32 = 0.004;

/// Corner pattern of two triangles covering a unit quad.
const QUAD_CORNERS: [(f32, f32); 6] = [
    (-1.0, -1.0),
    (1.0, -1.0),
    (1.0, 1.0),
    (-1.0, -1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
];

/// Vertex layout shared by the cube pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space unit normal.
    pub normal: [f32; 3],
    /// Linear RGB.
    pub color: [f32; 3],
}

/// Number of vertices emitted for one quad.
pub const VERTICES_PER_QUAD: usize = QUAD_CORNERS.len();

/// Build the full triangle list for a frame.
#[must_use]
pub fn build_mesh(
    frame: &SceneFrame,
    display: &DisplayOptions,
) -> Vec<CubeVertex> {
    let quads = frame.cubies.len() * 6 * 2;
    let mut vertices = Vec::with_capacity(quads * VERTICES_PER_QUAD);
    for cubie in &frame.cubies {
        push_cubie(&mut vertices, cubie, frame.body, display);
    }
    vertices
}

fn push_cubie(
    out: &mut Vec<CubeVertex>,
    cubie: &CubieInstance,
    body: [f32; 3],
    display: &DisplayOptions,
) {
    let half = display.cubie_size * 0.5;
    for face in FaceId::ALL {
        let normal = face.normal().as_vec3();
        push_quad(out, &cubie.transform, face, normal * half, half, body);
        if let Some(color) = cubie.sticker(face) {
            let center = normal * (half + STICKER_LIFT * display.cubie_size);
            let extent = half * display.sticker_scale.clamp(0.0, 1.0);
            push_quad(out, &cubie.transform, face, center, extent, color);
        }
    }
}

fn push_quad(
    out: &mut Vec<CubeVertex>,
    transform: &Mat4,
    face: FaceId,
    center: Vec3,
    extent: f32,
    color: [f32; 3],
) {
    let (right, up) = face.tangents();
    let normal = transform
        .transform_vector3(face.normal().as_vec3())
        .normalize_or_zero()
        .to_array();
    out.extend(QUAD_CORNERS.iter().map(|&(a, b)| {
        let local = center + (right * a + up * b) * extent;
        CubeVertex {
            position: transform.transform_point3(local).to_array(),
            normal,
            color,
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::controller::OrbitController;
    use crate::cube::FaceletState;
    use crate::options::Options;
    use crate::scene::CubeScene;

    fn frame(scene: &CubeScene) -> SceneFrame {
        let camera = OrbitController::new(&Default::default()).camera(1.0);
        scene.frame(&camera, None, &Options::default())
    }

    #[test]
    fn solved_cube_vertex_count() {
        let scene = CubeScene::new(&FaceletState::solved().into());
        let mesh = build_mesh(&frame(&scene), &DisplayOptions::default());
        // 27 × 6 body quads + 54 stickers
        assert_eq!(mesh.len(), (27 * 6 + 54) * VERTICES_PER_QUAD);
    }

    #[test]
    fn stickers_sit_above_the_body() {
        let scene = CubeScene::new(&FaceletState::solved().into());
        let display = DisplayOptions::default();
        let mesh = build_mesh(&frame(&scene), &display);
        let body_extent = display.spacing + display.cubie_size * 0.5;
        let outermost = mesh
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);
        assert!(outermost > body_extent);
        assert!(outermost < body_extent + 0.05);
    }

    #[test]
    fn normals_are_unit_length() {
        let scene = CubeScene::default();
        let mesh = build_mesh(&frame(&scene), &DisplayOptions::default());
        assert!(mesh
            .iter()
            .all(|v| (Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-5));
    }
}
