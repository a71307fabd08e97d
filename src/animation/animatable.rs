use crate::color::Color;
use crate::geometry::{AvatarGeometry, BadgeGeometry};

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for overshoot effects
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

impl Animatable for BadgeGeometry {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        BadgeGeometry {
            bg_x: f32::lerp(&from.bg_x, &to.bg_x, t),
            bg_y: f32::lerp(&from.bg_y, &to.bg_y, t),
            bg_width: f32::lerp(&from.bg_width, &to.bg_width, t),
            bg_height: f32::lerp(&from.bg_height, &to.bg_height, t),
            bg_radius: f32::lerp(&from.bg_radius, &to.bg_radius, t),
            cutout_x: f32::lerp(&from.cutout_x, &to.cutout_x, t),
            cutout_y: f32::lerp(&from.cutout_y, &to.cutout_y, t),
            cutout_width: f32::lerp(&from.cutout_width, &to.cutout_width, t),
            cutout_height: f32::lerp(&from.cutout_height, &to.cutout_height, t),
            cutout_radius: f32::lerp(&from.cutout_radius, &to.cutout_radius, t),
            dot_x: f32::lerp(&from.dot_x, &to.dot_x, t),
            dot_y: f32::lerp(&from.dot_y, &to.dot_y, t),
            dot_radius: f32::lerp(&from.dot_radius, &to.dot_radius, t),
        }
    }
}

impl Animatable for AvatarGeometry {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        AvatarGeometry {
            badge: BadgeGeometry::lerp(&from.badge, &to.badge, t),
            cutout_x: f32::lerp(&from.cutout_x, &to.cutout_x, t),
            cutout_y: f32::lerp(&from.cutout_y, &to.cutout_y, t),
            cutout_width: f32::lerp(&from.cutout_width, &to.cutout_width, t),
            cutout_height: f32::lerp(&from.cutout_height, &to.cutout_height, t),
            cutout_radius: f32::lerp(&from.cutout_radius, &to.cutout_radius, t),
        }
    }
}
