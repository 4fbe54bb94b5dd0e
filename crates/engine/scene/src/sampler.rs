//! Sphere surface sampling
//!
//! Generates the fixed, ordered point cloud the viewer shades every
//! frame. The sequence is built once at startup and never changes for
//! the lifetime of the process; its order (polar-major, azimuth-minor)
//! only determines draw order.

use phong_math::Vec3;

/// Number of points `sample_sphere` produces for a given angular step
///
/// `ceil(180 / step) * ceil(360 / step)`; 259,200 for a 0.5° step.
pub fn expected_point_count(step_deg: f32) -> usize {
    let beta_steps = (180.0 / step_deg).ceil() as usize;
    let alpha_steps = (360.0 / step_deg).ceil() as usize;
    beta_steps * alpha_steps
}

/// Sample a sphere of the given radius centered at the origin
///
/// Polar angle β walks 0°..180° and azimuth α walks 0°..360°, both at
/// `step_deg` increments. Loop counters are integral so the count is
/// exactly [`expected_point_count`] with no float-accumulation drift.
///
/// `step_deg > 0` and `radius > 0` are preconditions.
pub fn sample_sphere(radius: f32, step_deg: f32) -> Vec<Vec3> {
    debug_assert!(step_deg > 0.0);
    debug_assert!(radius > 0.0);

    let beta_steps = (180.0 / step_deg).ceil() as usize;
    let alpha_steps = (360.0 / step_deg).ceil() as usize;
    let mut points = Vec::with_capacity(beta_steps * alpha_steps);

    for bi in 0..beta_steps {
        let beta = (bi as f32 * step_deg).to_radians();
        let rsb = radius * beta.sin();
        let rcb = radius * beta.cos();
        for ai in 0..alpha_steps {
            let alpha = (ai as f32 * step_deg).to_radians();
            points.push(Vec3::new(rsb * alpha.cos(), rsb * alpha.sin(), rcb));
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_half_degree() {
        assert_eq!(expected_point_count(0.5), 259_200);
        let points = sample_sphere(100.0, 0.5);
        assert_eq!(points.len(), 259_200);
    }

    #[test]
    fn test_point_count_coarse_steps() {
        assert_eq!(expected_point_count(1.0), 180 * 360);
        assert_eq!(sample_sphere(100.0, 1.0).len(), 180 * 360);
        // Non-dividing step rounds up in both loops.
        assert_eq!(expected_point_count(7.0), 26 * 52);
        assert_eq!(sample_sphere(100.0, 7.0).len(), 26 * 52);
    }

    #[test]
    fn test_all_points_on_sphere() {
        let radius = 100.0;
        let points = sample_sphere(radius, 5.0);
        for p in &points {
            assert!(
                (p.magnitude() - radius).abs() < 1e-2,
                "|{:?}| = {}",
                p,
                p.magnitude()
            );
        }
    }

    #[test]
    fn test_first_point_is_north_pole() {
        // β = 0 puts the first row at the +z pole for every α.
        let points = sample_sphere(100.0, 10.0);
        assert!((points[0].z - 100.0).abs() < 1e-3);
        assert!(points[0].x.abs() < 1e-3);
        assert!(points[0].y.abs() < 1e-3);
    }

    #[test]
    fn test_beta_major_ordering() {
        let step = 10.0;
        let points = sample_sphere(100.0, step);
        let alpha_steps = (360.0f32 / step).ceil() as usize;
        // Within one β row the z coordinate is constant.
        let row = &points[alpha_steps..2 * alpha_steps];
        let z0 = row[0].z;
        for p in row {
            assert!((p.z - z0).abs() < 1e-3);
        }
    }
}
