//! Avatar-level compositing: a circular avatar silhouette with a notch carved
//! out of its bottom-right corner to seat the status badge.

use crate::status::{Status, StatusFlags};

use super::{
    BadgeGeometry, CUTOUT_BORDER_RADIUS, MOBILE_HEIGHT_RATIO, TYPING_WIDTH_RATIO,
};

/// Offsets (in [`super::REFERENCE_SIZE`] units) that seat the badge in the
/// avatar's corner.
const BADGE_TOP_OFFSET: f32 = 2.0;
const BADGE_LEFT_OFFSET: f32 = 6.0;

/// Named avatar size tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarSize {
    Size16,
    Size20,
    Size24,
    Size32,
    Size40,
    Size48,
    Size80,
    Size128,
}

impl AvatarSize {
    pub const ALL: [AvatarSize; 8] = [
        AvatarSize::Size16,
        AvatarSize::Size20,
        AvatarSize::Size24,
        AvatarSize::Size32,
        AvatarSize::Size40,
        AvatarSize::Size48,
        AvatarSize::Size80,
        AvatarSize::Size128,
    ];

    /// Avatar edge length in pixels.
    pub fn px(self) -> f32 {
        self.spec().size
    }

    /// Sizing constants for this tier.
    pub fn spec(self) -> SizeSpec {
        match self {
            AvatarSize::Size16 => SizeSpec::new(16.0, 6.0, 2.0, 0.0),
            AvatarSize::Size20 => SizeSpec::new(20.0, 6.0, 2.0, 0.0),
            AvatarSize::Size24 => SizeSpec::new(24.0, 8.0, 2.0, 0.0),
            AvatarSize::Size32 => SizeSpec::new(32.0, 10.0, 3.0, 0.0),
            AvatarSize::Size40 => SizeSpec::new(40.0, 12.0, 3.0, 0.0),
            AvatarSize::Size48 => SizeSpec::new(48.0, 12.0, 3.0, 2.0),
            AvatarSize::Size80 => SizeSpec::new(80.0, 16.0, 4.0, 4.0),
            AvatarSize::Size128 => SizeSpec::new(128.0, 24.0, 6.0, 8.0),
        }
    }
}

/// Absolute sizing constants for one avatar tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    /// Avatar edge length.
    pub size: f32,
    /// Badge size embedded in the corner.
    pub status: f32,
    /// Gap between avatar silhouette and badge.
    pub stroke: f32,
    /// Extra inset pulling the badge toward the avatar center.
    pub offset: f32,
}

impl SizeSpec {
    pub const fn new(size: f32, status: f32, stroke: f32, offset: f32) -> Self {
        Self {
            size,
            status,
            stroke,
            offset,
        }
    }

    /// Placement of the badge sub-viewport inside the avatar document:
    /// `(x, y, width, height)`. Sized for the widest (typing) and tallest
    /// (mobile) badge so reshaping never clips.
    pub fn badge_viewport(&self) -> (f32, f32, f32, f32) {
        let width = self.status * TYPING_WIDTH_RATIO;
        let height = self.status * MOBILE_HEIGHT_RATIO;
        let typing_offset = (width - self.status) / 2.0;
        let x = self.size - self.status - typing_offset - self.offset;
        let y = self.size - height - self.offset;
        (x, y, width, height)
    }

    /// Width the avatar document grows by to fit the typing pill overhang.
    pub fn typing_overhang(&self) -> f32 {
        ((self.status * TYPING_WIDTH_RATIO - self.status) / 2.0).ceil()
    }
}

/// Compound mask: the embedded badge geometry plus the rounded rect notched
/// out of the avatar circle to seat it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AvatarGeometry {
    pub badge: BadgeGeometry,
    pub cutout_x: f32,
    pub cutout_y: f32,
    pub cutout_width: f32,
    pub cutout_height: f32,
    pub cutout_radius: f32,
}

impl AvatarGeometry {
    /// Compose the avatar cutout and embedded badge for one input state.
    ///
    /// The badge always seats at the avatar's bottom-right: its effective
    /// width (typing pill) and height (phone) are subtracted from the
    /// bottom-right corner, padded by `stroke` and `offset`. With
    /// `disable_status_icons` the badge branch is forced to `Online`,
    /// yielding a neutral baseline shape for transition starts.
    pub fn compose(
        spec: SizeSpec,
        status: Status,
        flags: StatusFlags,
        disable_status_icons: bool,
    ) -> Self {
        let typing = flags.contains(StatusFlags::TYPING);
        let mobile_online =
            flags.contains(StatusFlags::MOBILE) && !typing && status == Status::Online;

        let width = if typing {
            spec.status * TYPING_WIDTH_RATIO
        } else {
            spec.status
        };
        let x_offset = (width - spec.status) / 2.0;
        let height = if mobile_online {
            spec.status * MOBILE_HEIGHT_RATIO
        } else {
            spec.status
        };
        let cutout_height = height + spec.stroke * 2.0;
        let cutout_radius = if mobile_online {
            cutout_height * CUTOUT_BORDER_RADIUS
        } else {
            (spec.status + spec.stroke * 2.0) / 2.0
        };

        let badge_status = if disable_status_icons {
            Status::Online
        } else {
            status
        };
        let badge = BadgeGeometry::resolve(
            badge_status,
            spec.status,
            StatusFlags::from_parts(mobile_online, typing),
            BADGE_TOP_OFFSET,
            BADGE_LEFT_OFFSET,
        );

        Self {
            badge,
            cutout_x: spec.size - width + x_offset - spec.stroke - spec.offset,
            cutout_y: spec.size - height - spec.stroke - spec.offset,
            cutout_width: width + spec.stroke * 2.0,
            cutout_height,
            cutout_radius,
        }
    }
}
