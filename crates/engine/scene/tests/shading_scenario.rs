//! End-to-end shading scenario
//!
//! Exercises the full pipeline the viewer runs each frame: sample the
//! sphere, shade every visible point, and check the known-good values
//! at the poles for a fixed light and material setup.

use phong_math::Vec3;
use phong_scene::{
    sample_sphere, shade_frame, shade_point, Category, Coefficients, Material, ModeFlags,
    SceneState,
};

fn scenario_state() -> SceneState {
    let mut state = SceneState::default();
    state.light = Vec3::new(0.0, 0.0, 120.0);
    state.material = Material {
        scene: Vec3::ZERO,
        ambient: Vec3::ZERO,
        diffuse: Vec3::splat(0.2),
        specular: Vec3::splat(0.4),
    };
    state.coeffs = Coefficients {
        k_ambient: 1.0,
        k_diffuse: 1.0,
        k_specular: 1.0,
        alpha: 0.3,
        speed: 1.0,
        step_scale: 0.01,
    };
    state.flags = ModeFlags {
        clamp_enabled: true,
        scale_enabled: false,
    };
    state
}

/// Test: near pole shades at clamped maxima, far pole is culled
#[test]
fn test_pole_scenario() {
    let state = scenario_state();

    // Pole nearest the light: N, L, and the reflected direction all
    // line up, so diffuse and specular sit at their clamped maxima.
    let near = Vec3::new(0.0, 0.0, 100.0);
    let color = shade_point(
        &near,
        &state.light,
        &state.material,
        &state.coeffs,
        &state.flags,
    )
    .unwrap();
    // diffuse 0.2 * 1 + specular 0.4 * 1^0.3
    assert!((color.x - 0.6).abs() < 1e-4, "got {:?}", color);
    assert!((color.y - 0.6).abs() < 1e-4);
    assert!((color.z - 0.6).abs() < 1e-4);

    // Far pole is excluded by the visibility cull before shading.
    let far = Vec3::new(0.0, 0.0, -100.0);
    let shaded = shade_frame(&[near, far], &state);
    assert_eq!(shaded.len(), 1);
    assert_eq!(shaded[0].position, near);
}

/// Test: a full sampled sphere shades exactly its visible hemisphere
#[test]
fn test_full_sphere_frame() {
    let state = scenario_state();
    let points = sample_sphere(100.0, 2.0);
    let shaded = shade_frame(&points, &state);

    assert!(!shaded.is_empty());
    assert!(shaded.len() < points.len());
    for sp in &shaded {
        assert!(sp.position.z >= 0.0);
        // Clamp mode keeps every term bounded, so with these materials
        // no channel can exceed diffuse + specular + ambient weight.
        assert!(sp.color.x <= 0.6 + 1e-4);
        assert!(sp.color.x >= 0.0);
    }

    // The brightest shaded point is at (or next to) the near pole.
    let max = shaded
        .iter()
        .map(|sp| sp.color.x)
        .fold(f32::NEG_INFINITY, f32::max);
    assert!((max - 0.6).abs() < 1e-3);
}

/// Test: mutations between frames change the next frame's output
#[test]
fn test_mutation_changes_next_frame() {
    let mut state = scenario_state();
    let points = sample_sphere(100.0, 10.0);

    let before = shade_frame(&points, &state);
    state.select_category(Category::KDiffuse);
    for _ in 0..50 {
        state.apply_decrement();
    }
    let after = shade_frame(&points, &state);

    assert_eq!(before.len(), after.len());
    let sum_before: f32 = before.iter().map(|sp| sp.color.x).sum();
    let sum_after: f32 = after.iter().map(|sp| sp.color.x).sum();
    assert!(sum_after < sum_before);
}
