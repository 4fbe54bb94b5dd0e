//! Key bindings for the interactive parameters
//!
//! One call of [`apply_bindings`] per frame performs every key-driven
//! mutation: held directional keys translate the light, held +/- keys
//! repeat the bound increment/decrement (once per press for the
//! decade-stepping speed category), and just-pressed keys rebind
//! the category or channel, toggle modes, or print diagnostics. The
//! selections are not exclusive; any combination of held keys takes
//! effect within the same frame.

use phong_math::Vec3;
use phong_scene::{Category, Channel, SceneState};
use tracing::info;
use winit::keyboard::KeyCode;

use crate::input::KeyboardState;

/// Light translation per frame per held directional key, in pixels
pub const LIGHT_STEP: f32 = 1.0;

/// Category-selecting keys; the last press wins
const CATEGORY_KEYS: [(KeyCode, Category); 9] = [
    (KeyCode::KeyA, Category::Ambient),
    (KeyCode::KeyD, Category::Diffuse),
    (KeyCode::KeyS, Category::Specular),
    (KeyCode::KeyC, Category::Scene),
    (KeyCode::KeyE, Category::Speed),
    (KeyCode::KeyU, Category::KAmbient),
    (KeyCode::KeyI, Category::KDiffuse),
    (KeyCode::KeyO, Category::KSpecular),
    (KeyCode::KeyP, Category::Alpha),
];

/// Channel-selecting keys
const CHANNEL_KEYS: [(KeyCode, Channel); 4] = [
    (KeyCode::Digit1, Channel::Red),
    (KeyCode::Digit2, Channel::Green),
    (KeyCode::Digit3, Channel::Blue),
    (KeyCode::Digit0, Channel::All),
];

pub const HELP: &str = "\
controls:
  arrows           move light in x/y
  page up/down     move light in z
  a/d/s/c          edit ambient/diffuse/specular/scene color
  e                edit speed (x10 per step)
  u/i/o            edit k_ambient/k_diffuse/k_specular
  p                edit alpha (shininess)
  1/2/3/0          edit red/green/blue/all channels
  = / -            increment / decrement (hold to repeat; speed steps once per press)
  f1 / f2          toggle clamp / scale mode
  x                print current value
  h                print this help
  esc              quit";

/// Apply one frame's worth of key-driven mutations to the scene
pub fn apply_bindings(keys: &KeyboardState, state: &mut SceneState) {
    // Light translation from held directional keys.
    let mut delta = Vec3::ZERO;
    if keys.is_pressed(KeyCode::ArrowLeft) {
        delta.x -= LIGHT_STEP;
    }
    if keys.is_pressed(KeyCode::ArrowRight) {
        delta.x += LIGHT_STEP;
    }
    if keys.is_pressed(KeyCode::ArrowDown) {
        delta.y -= LIGHT_STEP;
    }
    if keys.is_pressed(KeyCode::ArrowUp) {
        delta.y += LIGHT_STEP;
    }
    if keys.is_pressed(KeyCode::PageDown) {
        delta.z -= LIGHT_STEP;
    }
    if keys.is_pressed(KeyCode::PageUp) {
        delta.z += LIGHT_STEP;
    }
    if delta != Vec3::ZERO {
        state.translate_light(delta);
    }

    // Category and channel rebinding on fresh presses.
    for (key, category) in CATEGORY_KEYS {
        if keys.is_just_pressed(key) {
            state.select_category(category);
            info!("editing {}", category.label());
        }
    }
    for (key, channel) in CHANNEL_KEYS {
        if keys.is_just_pressed(key) {
            state.select_channel(channel);
            info!("channel: {}", channel.label());
        }
    }

    // Increment/decrement repeat every frame while held. The speed
    // category moves in decades, so there a held key acts only on the
    // frame it went down; per-frame repeat would blow past infinity in
    // under a second.
    let repeats = state.category() != Category::Speed;
    let increment = if repeats {
        keys.is_pressed(KeyCode::Equal) || keys.is_pressed(KeyCode::NumpadAdd)
    } else {
        keys.is_just_pressed(KeyCode::Equal) || keys.is_just_pressed(KeyCode::NumpadAdd)
    };
    let decrement = if repeats {
        keys.is_pressed(KeyCode::Minus) || keys.is_pressed(KeyCode::NumpadSubtract)
    } else {
        keys.is_just_pressed(KeyCode::Minus) || keys.is_just_pressed(KeyCode::NumpadSubtract)
    };
    if increment {
        state.apply_increment();
    }
    if decrement {
        state.apply_decrement();
    }

    // Mode toggles and diagnostics.
    if keys.is_just_pressed(KeyCode::F1) {
        state.toggle_clamp();
        info!("clamp mode: {}", state.flags.clamp_enabled);
    }
    if keys.is_just_pressed(KeyCode::F2) {
        state.toggle_scale();
        info!("scale mode: {}", state.flags.scale_enabled);
    }
    if keys.is_just_pressed(KeyCode::KeyX) {
        info!("{}", state.describe_current());
    }
    if keys.is_just_pressed(KeyCode::KeyH) {
        info!("{}", HELP);
    }
}
