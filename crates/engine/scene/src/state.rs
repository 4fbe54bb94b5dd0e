//! Interactive scene state
//!
//! One [`SceneState`] value owns everything the user can mutate at
//! runtime: the light position, the four material colors, the scalar
//! shading coefficients, the mode flags, and the two selectors that
//! decide what the increment/decrement actions operate on. The frame
//! loop mutates it in its input phase and reads it in its shading
//! phase; nothing else touches it.

use phong_math::Vec3;

/// Material reflectance colors
///
/// `scene` is the constant background contribution added to every
/// shaded point; the other three are the classic Phong reflectance
/// colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub scene: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            scene: Vec3::ZERO,
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.2),
            specular: Vec3::splat(0.4),
        }
    }
}

/// Scalar shading coefficients
///
/// All values stay non-negative; decrements clamp at zero. `speed`
/// multiplies `step_scale` to form the per-frame edit amount and is
/// itself user-adjustable in decades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub k_ambient: f32,
    pub k_diffuse: f32,
    pub k_specular: f32,
    /// Shininess exponent of the specular highlight
    pub alpha: f32,
    pub speed: f32,
    pub step_scale: f32,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            k_ambient: 1.0,
            k_diffuse: 1.0,
            k_specular: 1.0,
            alpha: 0.3,
            speed: 1.0,
            step_scale: 0.01,
        }
    }
}

/// Shading mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeFlags {
    /// Clamp diffuse and specular terms to [0, 1] before scaling
    pub clamp_enabled: bool,
    /// Normalize the final color by the total coefficient weight
    pub scale_enabled: bool,
}

impl Default for ModeFlags {
    fn default() -> Self {
        Self {
            clamp_enabled: true,
            scale_enabled: false,
        }
    }
}

/// The mutation target the increment/decrement actions are bound to
///
/// Rebound by category-selecting keys; the last selection wins and
/// exactly one category is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ambient,
    Diffuse,
    Specular,
    Scene,
    Speed,
    KAmbient,
    KDiffuse,
    KSpecular,
    Alpha,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ambient => "ambient color",
            Category::Diffuse => "diffuse color",
            Category::Specular => "specular color",
            Category::Scene => "scene color",
            Category::Speed => "speed",
            Category::KAmbient => "k_ambient",
            Category::KDiffuse => "k_diffuse",
            Category::KSpecular => "k_specular",
            Category::Alpha => "alpha",
        }
    }
}

/// The color channel edits apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    All,
}

impl Channel {
    /// Direction vector for a color edit on this channel
    pub fn direction(&self) -> Vec3 {
        match self {
            Channel::Red => Vec3::new(1.0, 0.0, 0.0),
            Channel::Green => Vec3::new(0.0, 1.0, 0.0),
            Channel::Blue => Vec3::new(0.0, 0.0, 1.0),
            Channel::All => Vec3::ONE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::All => "all",
        }
    }
}

/// All mutable lighting and material state
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub light: Vec3,
    pub material: Material,
    pub coeffs: Coefficients,
    pub flags: ModeFlags,
    category: Category,
    channel: Channel,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            light: Vec3::new(0.0, 0.0, 120.0),
            material: Material::default(),
            coeffs: Coefficients::default(),
            flags: ModeFlags::default(),
            category: Category::Diffuse,
            channel: Channel::All,
        }
    }
}

impl SceneState {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Rebind increment/decrement/info to a new category
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Rebind the active channel selector
    pub fn select_channel(&mut self, channel: Channel) {
        self.channel = channel;
    }

    /// Move the light position
    ///
    /// Driven directly by held directional keys every frame,
    /// independent of the category/channel mechanism.
    pub fn translate_light(&mut self, delta: Vec3) {
        self.light += delta;
    }

    pub fn toggle_clamp(&mut self) {
        self.flags.clamp_enabled = !self.flags.clamp_enabled;
    }

    pub fn toggle_scale(&mut self) {
        self.flags.scale_enabled = !self.flags.scale_enabled;
    }

    /// Increase the bound category by one edit step
    pub fn apply_increment(&mut self) {
        self.apply_step(1.0);
    }

    /// Decrease the bound category by one edit step
    ///
    /// Scalar coefficients clamp at zero instead of going negative.
    pub fn apply_decrement(&mut self) {
        self.apply_step(-1.0);
    }

    fn apply_step(&mut self, sign: f32) {
        let amount = self.coeffs.step_scale * self.coeffs.speed * sign;
        let color_delta = self.channel.direction().mul_scalar(amount);
        match self.category {
            Category::Ambient => self.material.ambient += color_delta,
            Category::Diffuse => self.material.diffuse += color_delta,
            Category::Specular => self.material.specular += color_delta,
            Category::Scene => self.material.scene += color_delta,
            Category::Speed => {
                if sign > 0.0 {
                    self.coeffs.speed *= 10.0;
                } else {
                    self.coeffs.speed /= 10.0;
                }
            }
            Category::KAmbient => {
                self.coeffs.k_ambient = (self.coeffs.k_ambient + amount).max(0.0)
            }
            Category::KDiffuse => {
                self.coeffs.k_diffuse = (self.coeffs.k_diffuse + amount).max(0.0)
            }
            Category::KSpecular => {
                self.coeffs.k_specular = (self.coeffs.k_specular + amount).max(0.0)
            }
            Category::Alpha => self.coeffs.alpha = (self.coeffs.alpha + amount).max(0.0),
        }
    }

    /// Report the active category's current value for diagnostics
    pub fn describe_current(&self) -> String {
        let color = |v: &Vec3| format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z);
        let value = match self.category {
            Category::Ambient => color(&self.material.ambient),
            Category::Diffuse => color(&self.material.diffuse),
            Category::Specular => color(&self.material.specular),
            Category::Scene => color(&self.material.scene),
            Category::Speed => format!("{:.4}", self.coeffs.speed),
            Category::KAmbient => format!("{:.4}", self.coeffs.k_ambient),
            Category::KDiffuse => format!("{:.4}", self.coeffs.k_diffuse),
            Category::KSpecular => format!("{:.4}", self.coeffs.k_specular),
            Category::Alpha => format!("{:.4}", self.coeffs.alpha),
        };
        format!(
            "{} = {} [channel: {}, light: ({:.1}, {:.1}, {:.1})]",
            self.category.label(),
            value,
            self.channel.label(),
            self.light.x,
            self.light.y,
            self.light.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_never_goes_negative() {
        let mut state = SceneState::default();
        state.select_category(Category::KSpecular);
        for _ in 0..500 {
            state.apply_decrement();
        }
        assert!(state.coeffs.k_specular >= 0.0);
        assert_eq!(state.coeffs.k_specular, 0.0);
    }

    #[test]
    fn test_speed_moves_in_decades() {
        let mut state = SceneState::default();
        state.select_category(Category::Speed);
        state.apply_increment();
        assert!((state.coeffs.speed - 10.0).abs() < 1e-6);
        state.apply_decrement();
        state.apply_decrement();
        assert!((state.coeffs.speed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_channel_scopes_color_edit() {
        let mut state = SceneState::default();
        state.select_category(Category::Diffuse);
        state.select_channel(Channel::Red);
        let before = state.material.diffuse;
        state.apply_increment();
        let after = state.material.diffuse;
        assert!(after.x > before.x);
        assert_eq!(after.y, before.y);
        assert_eq!(after.z, before.z);
    }

    #[test]
    fn test_all_channel_moves_every_component() {
        let mut state = SceneState::default();
        state.select_category(Category::Specular);
        state.select_channel(Channel::All);
        let before = state.material.specular;
        state.apply_increment();
        let after = state.material.specular;
        assert!(after.x > before.x && after.y > before.y && after.z > before.z);
    }

    #[test]
    fn test_edit_amount_scales_with_speed() {
        let mut state = SceneState::default();
        state.select_category(Category::Speed);
        state.apply_increment(); // speed = 10
        state.select_category(Category::KDiffuse);
        state.apply_increment();
        // 1.0 + 0.01 * 10.0
        assert!((state.coeffs.k_diffuse - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_last_category_selection_wins() {
        let mut state = SceneState::default();
        state.select_category(Category::Ambient);
        state.select_category(Category::Alpha);
        assert_eq!(state.category(), Category::Alpha);
        let alpha_before = state.coeffs.alpha;
        state.apply_increment();
        assert!(state.coeffs.alpha > alpha_before);
        assert_eq!(state.material.ambient, Material::default().ambient);
    }

    #[test]
    fn test_translate_light() {
        let mut state = SceneState::default();
        let before = state.light;
        state.translate_light(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(state.light, before + Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_describe_current_reports_active_category() {
        let mut state = SceneState::default();
        state.select_category(Category::KSpecular);
        let text = state.describe_current();
        assert!(text.contains("k_specular"));
        assert!(text.contains("1.0000"));
    }

    #[test]
    fn test_mode_toggles() {
        let mut state = SceneState::default();
        assert!(state.flags.clamp_enabled);
        assert!(!state.flags.scale_enabled);
        state.toggle_clamp();
        state.toggle_scale();
        assert!(!state.flags.clamp_enabled);
        assert!(state.flags.scale_enabled);
    }
}
