//! Phong lighting evaluation
//!
//! [`shade_point`] is a pure function of its inputs and is invoked once
//! per visible surface point per frame. [`shade_frame`] wraps it with
//! the visibility cull and the skip-on-failure policy: one degenerate
//! sample is logged and dropped, it never blanks the frame.

use phong_math::{Result, Vec3};
use tracing::warn;

use crate::state::{Coefficients, Material, ModeFlags, SceneState};

/// One shaded surface point, ready for the draw path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedPoint {
    pub position: Vec3,
    pub color: Vec3,
}

/// Visibility cull for the fixed viewer
///
/// The viewer sits at the origin with the light defaulting to +z; the
/// visible hemisphere is z >= 0 and points behind it are skipped
/// entirely. This is a simple cull, not occlusion.
pub fn is_visible(point: &Vec3) -> bool {
    point.z >= 0.0
}

/// Shade one surface point with the Phong reflection model
///
/// The sphere is centered at the origin, so the outward normal of a
/// surface point is the point itself normalized. Fails if any of the
/// intermediate direction vectors cannot be normalized (point at the
/// origin, light coincident with the point, non-finite input).
pub fn shade_point(
    point: &Vec3,
    light: &Vec3,
    material: &Material,
    coeffs: &Coefficients,
    flags: &ModeFlags,
) -> Result<Vec3> {
    let n = point.try_normalize()?;
    let l = (*light - *point).try_normalize()?;
    let e = (-*point).try_normalize()?;
    let r = (-l.reflect(&n)).try_normalize()?;

    let mut diffuse = material.diffuse.mul_scalar(n.dot(&l).max(0.0));
    let mut specular = material
        .specular
        .mul_scalar(r.dot(&e).max(0.0).powf(coeffs.alpha));

    if flags.clamp_enabled {
        diffuse = diffuse.clamp(0.0, 1.0);
        specular = specular.clamp(0.0, 1.0);
    }

    let diffuse = diffuse.mul_scalar(coeffs.k_diffuse);
    let specular = specular.mul_scalar(coeffs.k_specular);
    let ambient = material.ambient.mul_scalar(coeffs.k_ambient);

    let result = ambient + diffuse + specular + material.scene;

    if flags.scale_enabled {
        // Every coefficient can be decremented to zero, which with a
        // black scene color would divide to NaN; floor the divisor to
        // keep the output finite.
        let k = coeffs.k_ambient + coeffs.k_diffuse + coeffs.k_specular;
        let divisor = |scene: f32| (k + scene).max(f32::EPSILON);
        Ok(Vec3::new(
            result.x / divisor(material.scene.x),
            result.y / divisor(material.scene.y),
            result.z / divisor(material.scene.z),
        ))
    } else {
        Ok(result)
    }
}

/// Shade every visible point of the sample sequence
///
/// Culled points are skipped outright; points whose shading fails are
/// logged at `warn` and dropped so the rest of the frame still draws.
pub fn shade_frame(points: &[Vec3], state: &SceneState) -> Vec<ShadedPoint> {
    let mut shaded = Vec::with_capacity(points.len() / 2 + 1);
    for point in points {
        if !is_visible(point) {
            continue;
        }
        match shade_point(
            point,
            &state.light,
            &state.material,
            &state.coeffs,
            &state.flags,
        ) {
            Ok(color) => shaded.push(ShadedPoint {
                position: *point,
                color,
            }),
            Err(e) => warn!("skipping point {:?}: {}", point, e),
        }
    }
    shaded
}
