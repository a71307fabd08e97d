//! Standalone animated status badge.

use std::time::Duration;

use crate::animation::{AnimationState, SpringConfig, Transition};
use crate::color::Color;
use crate::geometry::BadgeGeometry;
use crate::reactive::Memo;
use crate::render::svg;
use crate::status::{Status, StatusFlags};

type BadgeInputs = (Status, StatusFlags, u32);

/// A status badge whose shape and fill spring-animate between presence
/// states.
///
/// Inputs change through setters; each frame the host calls
/// [`StatusBadge::advance`] with the frame delta and reads the interpolated
/// snapshot back. Target geometry is memoized on the input tuple, so setting
/// the same state twice never restarts an interpolation.
pub struct StatusBadge {
    size: f32,
    status: Status,
    mobile: bool,
    typing: bool,
    color_override: Option<Color>,
    geometry: AnimationState<BadgeGeometry>,
    fill: AnimationState<Color>,
    targets: Memo<BadgeInputs, BadgeGeometry>,
}

impl StatusBadge {
    pub fn new(size: f32) -> Self {
        let status = Status::Offline;
        let geometry = BadgeGeometry::resolve(status, size, StatusFlags::empty(), 0.0, 0.0);
        let transition = Transition::spring(SpringConfig::BADGE);
        let mut geometry_anim = AnimationState::new(geometry, transition.clone());
        geometry_anim.set_immediate(geometry);
        let mut fill = AnimationState::new(status.color(), transition);
        fill.set_immediate(status.color());
        Self {
            size,
            status,
            mobile: false,
            typing: false,
            color_override: None,
            geometry: geometry_anim,
            fill,
            targets: Memo::new(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.retarget();
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
        self.retarget();
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
        self.retarget();
    }

    /// Replace the status-derived fill with an explicit color (or restore
    /// the derived one with `None`).
    pub fn set_color_override(&mut self, color: Option<Color>) {
        self.color_override = color;
        self.retarget();
    }

    /// Resize the badge. The shape morphs to the new scale like any other
    /// state change.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
        self.retarget();
    }

    /// Advance the interpolations by a frame delta. Returns true while
    /// either shape or fill is still in motion.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let shape = self.geometry.advance(dt).is_changed();
        let fill = self.fill.advance(dt).is_changed();
        if shape || fill {
            log::trace!("badge frame: status={} animating", self.status.name());
        }
        self.geometry.is_animating() || self.fill.is_animating()
    }

    /// Current interpolated geometry snapshot.
    pub fn geometry(&self) -> &BadgeGeometry {
        self.geometry.current()
    }

    /// Current interpolated fill.
    pub fn fill(&self) -> Color {
        *self.fill.current()
    }

    /// Badge viewport: `(width, height)`.
    pub fn viewport(&self) -> (f32, f32) {
        BadgeGeometry::viewport(self.size)
    }

    /// Render the current frame as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        svg::badge_document(self.geometry(), self.fill(), self.size)
    }

    fn retarget(&mut self) {
        // Mobile has its own silhouette only while actually online; typing
        // overrides the status shape entirely.
        let mobile_online = self.mobile && !self.typing && self.status == Status::Online;
        let flags = StatusFlags::from_parts(mobile_online, self.typing);
        let size = self.size;
        let key: BadgeInputs = (self.status, flags, size.to_bits());
        let target = self
            .targets
            .get(key, |&(status, flags, bits)| {
                BadgeGeometry::resolve(status, f32::from_bits(bits), flags, 0.0, 0.0)
            });
        self.geometry.animate_to(target);
        self.fill
            .animate_to(self.color_override.unwrap_or_else(|| self.status.color()));
    }
}
