//! Status badge geometry.
//!
//! The badge is drawn through an SVG mask built from three primitives: a
//! background rounded rect (white), a cutout rounded rect (black), and a
//! cutout circle (black). Every presence status maps to one configuration of
//! those primitives; animating between two configurations morphs one badge
//! shape into another.

mod avatar;

pub use avatar::{AvatarGeometry, AvatarSize, SizeSpec};

use crate::status::{Status, StatusFlags};

/// Unit size the ratios below were authored against. Offsets passed to
/// [`BadgeGeometry::resolve`] are expressed in this unit and rescaled.
pub const REFERENCE_SIZE: f32 = 8.0;

/// Width of the typing pill relative to the badge size.
pub const TYPING_WIDTH_RATIO: f32 = 2.5;

/// Height of the mobile (phone) badge relative to the badge size. Also the
/// badge viewport aspect: the viewport is always tall enough for the phone.
pub const MOBILE_HEIGHT_RATIO: f32 = 1.5;

/// Corner radius of the phone silhouette, relative to its height.
pub const MOBILE_ICON_RADIUS: f32 = 0.25;

/// Corner radius of the avatar-level cutout in mobile mode, relative to the
/// cutout height.
pub const CUTOUT_BORDER_RADIUS: f32 = 0.3;

/// The complete set of numeric shape parameters describing a badge's visual
/// state. A pure function of `(status, size, flags, offsets)`; superseded
/// snapshots are simply dropped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BadgeGeometry {
    pub bg_x: f32,
    pub bg_y: f32,
    pub bg_width: f32,
    pub bg_height: f32,
    pub bg_radius: f32,
    pub cutout_x: f32,
    pub cutout_y: f32,
    pub cutout_width: f32,
    pub cutout_height: f32,
    pub cutout_radius: f32,
    pub dot_x: f32,
    pub dot_y: f32,
    pub dot_radius: f32,
}

impl BadgeGeometry {
    /// Resolve the badge geometry for a status and its display modifiers.
    ///
    /// Total and deterministic: every input combination has a defined output
    /// branch. `TYPING` wins over everything; `MOBILE` only matters for
    /// `Online`. `top_offset`/`left_offset` are authored in
    /// [`REFERENCE_SIZE`] units and shift the badge inside a larger
    /// composite (see [`AvatarGeometry`]).
    pub fn resolve(
        status: Status,
        size: f32,
        flags: StatusFlags,
        top_offset: f32,
        left_offset: f32,
    ) -> Self {
        let top = top_offset / REFERENCE_SIZE * size;
        let left = left_offset / REFERENCE_SIZE * size;

        if flags.contains(StatusFlags::TYPING) {
            // Wide pill; the dots themselves are a separate overlay, so the
            // cutout and dot collapse to nothing.
            return Self {
                bg_x: 0.0,
                bg_y: 0.25 * size + top,
                bg_width: size * TYPING_WIDTH_RATIO,
                bg_height: size,
                bg_radius: 0.5 * size,
                cutout_x: 0.5 * size + left,
                cutout_y: 0.75 * size + top,
                cutout_width: 0.0,
                cutout_height: 0.0,
                cutout_radius: 0.0,
                dot_x: 0.5 * size + left,
                dot_y: 0.75 * size + top,
                dot_radius: 0.0,
            };
        }

        match status {
            Status::Online if flags.contains(StatusFlags::MOBILE) => Self {
                // Phone silhouette: rounded body, square screen cutout,
                // home-button dot.
                bg_x: left,
                bg_y: 0.0,
                bg_width: size,
                bg_height: size * MOBILE_HEIGHT_RATIO,
                bg_radius: size * MOBILE_HEIGHT_RATIO * MOBILE_ICON_RADIUS,
                cutout_x: 0.125 * size + left,
                cutout_y: 0.25 * size,
                cutout_width: 0.75 * size,
                cutout_height: 0.75 * size,
                cutout_radius: 0.0,
                dot_x: 0.5 * size + left,
                dot_y: 1.25 * size,
                dot_radius: 0.125 * size,
            },
            Status::Online => Self {
                // Solid circle, no inner cutout.
                bg_x: left,
                bg_y: 0.25 * size + top,
                bg_width: size,
                bg_height: size,
                bg_radius: 0.5 * size,
                cutout_x: 0.5 * size + left,
                cutout_y: 0.75 * size + top,
                cutout_width: 0.0,
                cutout_height: 0.0,
                cutout_radius: 0.0,
                dot_x: 0.5 * size + left,
                dot_y: 0.75 * size + top,
                dot_radius: 0.0,
            },
            Status::Idle => Self {
                // Crescent: round cutout shifted up-and-left of center.
                bg_x: left,
                bg_y: 0.25 * size + top,
                bg_width: size,
                bg_height: size,
                bg_radius: 0.5 * size,
                cutout_x: -(0.125 * size) + left,
                cutout_y: 0.125 * size + top,
                cutout_width: 0.75 * size,
                cutout_height: 0.75 * size,
                cutout_radius: 0.375 * size,
                dot_x: 0.5 * size + left,
                dot_y: 0.75 * size + top,
                dot_radius: 0.0,
            },
            Status::Dnd => Self {
                // Dash: short wide bar through the vertical center.
                bg_x: left,
                bg_y: 0.25 * size + top,
                bg_width: size,
                bg_height: size,
                bg_radius: 0.5 * size,
                cutout_x: 0.125 * size + left,
                cutout_y: 0.625 * size + top,
                cutout_width: 0.75 * size,
                cutout_height: 0.25 * size,
                cutout_radius: 0.125 * size,
                dot_x: 0.5 * size + left,
                dot_y: 0.75 * size + top,
                dot_radius: 0.0,
            },
            Status::Offline => Self {
                // Ring: centered cutout half the badge size.
                bg_x: left,
                bg_y: 0.25 * size + top,
                bg_width: size,
                bg_height: size,
                bg_radius: 0.5 * size,
                cutout_x: 0.25 * size + left,
                cutout_y: 0.5 * size + top,
                cutout_width: 0.5 * size,
                cutout_height: 0.5 * size,
                cutout_radius: 0.25 * size,
                dot_x: 0.5 * size + left,
                dot_y: 0.75 * size + top,
                dot_radius: 0.0,
            },
        }
    }

    /// Viewport of a standalone badge: wide enough for the circle, tall
    /// enough for the phone.
    pub fn viewport(size: f32) -> (f32, f32) {
        (size, (size * MOBILE_HEIGHT_RATIO).ceil())
    }
}
