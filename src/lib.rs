//! Animated presence-status badges and avatar cutouts.
//!
//! Presence states (online / idle / do-not-disturb / offline, crossed with
//! mobile and typing modifiers) map to geometry snapshots describing an SVG
//! mask; spring-physics interpolation morphs one snapshot into the next when
//! the state changes.
//!
//! The crate splits into a pure core and a stateful shell:
//!
//! - [`geometry`] resolves `(status, size, modifiers)` into a
//!   [`geometry::BadgeGeometry`] snapshot and composes the avatar-level
//!   cutout — total, deterministic, no hidden state.
//! - [`animation`] is the driver: given a from/to snapshot and a
//!   [`animation::Transition`], it produces the interpolated stream, advanced
//!   by the host's frame clock.
//! - [`widgets`] own the driver state per component ([`widgets::StatusBadge`],
//!   [`widgets::Avatar`], [`widgets::TypingDots`]).
//! - [`render`] turns frames into SVG documents and, through resvg, RGBA
//!   rasters.
//!
//! ```
//! use std::time::Duration;
//! use presenza::prelude::*;
//!
//! let mut badge = StatusBadge::new(32.0);
//! badge.set_status(Status::Idle);
//! while badge.advance(Duration::from_millis(16)) {}
//! let svg = badge.to_svg();
//! assert!(svg.contains("<mask"));
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod reactive;
pub mod render;
pub mod status;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{
        AdvanceResult, Animatable, AnimationState, SpringConfig, SpringState, TimingFunction,
        Transition,
    };
    pub use crate::color::Color;
    pub use crate::geometry::{AvatarGeometry, AvatarSize, BadgeGeometry, SizeSpec};
    pub use crate::render::{rasterize, RenderError};
    pub use crate::status::{status_color, Status, StatusFlags};
    pub use crate::widgets::{Avatar, Baseline, DotsPhase, StatusBadge, TypingDots};
}
