//! Animated avatar with an embedded status badge.
//!
//! The avatar is a circular silhouette with a notch carved out of its
//! bottom-right corner; the badge sits in the notch and both spring-animate
//! together when presence changes. The typing indicator toggles the dots
//! overlay in lockstep with the geometry retarget.

use std::time::Duration;

use crate::animation::{AnimationState, SpringConfig, Transition};
use crate::color::Color;
use crate::geometry::{AvatarGeometry, AvatarSize, SizeSpec};
use crate::reactive::Memo;
use crate::render::svg;
use crate::status::{Status, StatusFlags};
use crate::widgets::dots::{DotsFrame, TypingDots};

type AvatarInputs = (Status, StatusFlags, bool);

/// Builder-style configuration for the transition baseline.
///
/// Status changes animate from the previous frame once running; the baseline
/// only decides the shape the very first transition starts from.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub status: Status,
    pub mobile: bool,
    pub color: Option<Color>,
}

impl Default for Baseline {
    fn default() -> Self {
        // Mobile-online baseline: the first morph always starts from the
        // same neutral shape.
        Self {
            status: Status::Online,
            mobile: true,
            color: None,
        }
    }
}

/// Stateful animated avatar.
pub struct Avatar {
    size: AvatarSize,
    status: Status,
    mobile: bool,
    typing: bool,
    disable_status_icons: bool,
    color_override: Option<Color>,
    geometry: AnimationState<AvatarGeometry>,
    fill: AnimationState<Color>,
    targets: Memo<AvatarInputs, AvatarGeometry>,
    dots: TypingDots,
    image_href: Option<String>,
}

impl Avatar {
    pub fn new(size: AvatarSize) -> Self {
        Self::with_baseline(size, Baseline::default())
    }

    /// Create an avatar whose first transition starts from `baseline`.
    pub fn with_baseline(size: AvatarSize, baseline: Baseline) -> Self {
        let spec = size.spec();
        let from_flags = StatusFlags::from_parts(baseline.mobile, false);
        let from_geometry = AvatarGeometry::compose(spec, baseline.status, from_flags, false);
        let from_color = baseline.color.unwrap_or_else(|| baseline.status.color());

        let transition = Transition::spring(SpringConfig::AVATAR);
        let mut geometry = AnimationState::new(from_geometry, transition.clone());
        geometry.set_immediate(from_geometry);
        let mut fill = AnimationState::new(from_color, transition);
        fill.set_immediate(from_color);

        let mut avatar = Self {
            size,
            status: baseline.status,
            mobile: baseline.mobile,
            typing: false,
            disable_status_icons: false,
            color_override: None,
            geometry,
            fill,
            targets: Memo::new(),
            dots: TypingDots::new(),
            image_href: None,
        };
        avatar.retarget();
        avatar
    }

    pub fn size(&self) -> AvatarSize {
        self.size
    }

    pub fn spec(&self) -> SizeSpec {
        self.size.spec()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        if status != self.status {
            log::debug!("avatar status: {} -> {}", self.status.name(), status.name());
        }
        self.status = status;
        self.retarget();
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
        self.retarget();
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
        self.dots.set_visible(typing);
        self.retarget();
    }

    /// Force the badge to the neutral (online) shape regardless of status.
    pub fn set_disable_status_icons(&mut self, disable: bool) {
        self.disable_status_icons = disable;
        self.retarget();
    }

    pub fn set_color_override(&mut self, color: Option<Color>) {
        self.color_override = color;
        self.retarget();
    }

    /// Host focus, forwarded to the dots pulse.
    pub fn set_focused(&mut self, focused: bool) {
        self.dots.set_focused(focused);
    }

    /// Avatar image reference embedded in the SVG output. Rendering falls
    /// back to a flat disc when unset (or when the host never loads it).
    pub fn set_image_href(&mut self, href: Option<String>) {
        self.image_href = href;
    }

    /// Advance all interpolations by a frame delta; true while in motion.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let geometry = self.geometry.advance(dt).is_changed();
        let fill = self.fill.advance(dt).is_changed();
        let dots = self.dots.advance(dt);
        geometry || fill || dots || self.geometry.is_animating() || self.fill.is_animating()
    }

    pub fn geometry(&self) -> &AvatarGeometry {
        self.geometry.current()
    }

    pub fn fill(&self) -> Color {
        *self.fill.current()
    }

    /// Current dots overlay frame, sized for this avatar's badge.
    pub fn dots_frame(&self) -> Option<DotsFrame> {
        self.dots.frame(self.spec().status / 4.0)
    }

    /// Render the current frame as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        svg::avatar_document(
            self.spec(),
            self.geometry(),
            self.fill(),
            self.dots_frame().as_ref(),
            self.image_href.as_deref(),
        )
    }

    fn retarget(&mut self) {
        let flags = StatusFlags::from_parts(self.mobile, self.typing);
        let key: AvatarInputs = (self.status, flags, self.disable_status_icons);
        let spec = self.spec();
        let target = self.targets.get(key, |&(status, flags, disabled)| {
            AvatarGeometry::compose(spec, status, flags, disabled)
        });
        self.geometry.animate_to(target);
        self.fill
            .animate_to(self.color_override.unwrap_or_else(|| self.status.color()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MOBILE_HEIGHT_RATIO;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(avatar: &mut Avatar) {
        for _ in 0..600 {
            avatar.advance(FRAME);
        }
    }

    #[test]
    fn test_first_transition_starts_from_baseline() {
        let baseline = Baseline {
            status: Status::Dnd,
            mobile: false,
            color: None,
        };
        let mut avatar = Avatar::with_baseline(AvatarSize::Size32, baseline);
        // Construction retargets to the same state, so nothing moves yet.
        let expected = AvatarGeometry::compose(
            AvatarSize::Size32.spec(),
            Status::Dnd,
            StatusFlags::empty(),
            false,
        );
        assert_eq!(*avatar.geometry(), expected);

        avatar.set_status(Status::Idle);
        avatar.advance(FRAME);
        assert_ne!(*avatar.geometry(), expected);
    }

    #[test]
    fn test_default_baseline_is_mobile_online() {
        let avatar = Avatar::new(AvatarSize::Size32);
        let spec = AvatarSize::Size32.spec();
        // Geometry target after construction equals the baseline compose.
        let expected =
            AvatarGeometry::compose(spec, Status::Online, StatusFlags::MOBILE, false);
        assert_eq!(*avatar.geometry(), expected);
        assert_eq!(
            expected.cutout_height,
            spec.status * MOBILE_HEIGHT_RATIO + spec.stroke * 2.0
        );
    }

    #[test]
    fn test_typing_toggles_dots() {
        let mut avatar = Avatar::new(AvatarSize::Size80);
        assert!(avatar.dots_frame().is_none());
        avatar.set_typing(true);
        assert!(avatar.dots_frame().is_some());
        settle(&mut avatar);

        avatar.set_typing(false);
        settle(&mut avatar);
        assert!(avatar.dots_frame().is_none());
    }

    #[test]
    fn test_disable_status_icons_masks_status_shape() {
        let mut avatar = Avatar::new(AvatarSize::Size40);
        avatar.set_disable_status_icons(true);
        avatar.set_status(Status::Dnd);
        settle(&mut avatar);

        let online_badge = AvatarGeometry::compose(
            AvatarSize::Size40.spec(),
            Status::Online,
            StatusFlags::empty(),
            false,
        )
        .badge;
        assert!((avatar.geometry().badge.cutout_width - online_badge.cutout_width).abs() < 0.05);
        // Fill still tracks the real status.
        assert!((avatar.fill().r - Color::STATUS_RED.r).abs() < 0.05);
    }

    #[test]
    fn test_settles_on_status_change() {
        let mut avatar = Avatar::new(AvatarSize::Size32);
        avatar.set_status(Status::Offline);
        settle(&mut avatar);
        let expected = AvatarGeometry::compose(
            AvatarSize::Size32.spec(),
            Status::Offline,
            StatusFlags::empty(),
            false,
        );
        assert!((avatar.geometry().badge.cutout_width - expected.badge.cutout_width).abs() < 0.05);
        assert!((avatar.geometry().cutout_radius - expected.cutout_radius).abs() < 0.05);
    }
}
