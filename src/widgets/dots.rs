//! The typing indicator: three pulsing dots.
//!
//! The repeating animation is modeled as a restartable periodic task: an
//! explicit phase machine plus a cycle clock, both advanced by the host's
//! frame ticker. Dropping the value cancels everything; there are no timers
//! or rescheduled callbacks.

use std::time::Duration;

use crate::animation::{AnimationState, SpringConfig, Transition};

/// One cycle unit of the pulse clock, in milliseconds.
pub const DOT_CYCLE_MS: f32 = 600.0;

/// Phase lag between neighboring dots, in cycle units.
const TIMING_OFFSET: f32 = 0.25;

/// Initial phase of the cycle clock. Restarting from here makes a resumed
/// animation begin at the resting pose.
const CYCLE_OFFSET: f32 = 2.8;

/// Spacing between dot centers, in dot radii.
const DOT_SPACING: f32 = 2.5;

/// Visibility phases of the dots overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotsPhase {
    /// Not rendered at all.
    Hidden,
    /// Expanding out of the center point.
    Entering,
    /// Fully visible, pulsing.
    Shown,
    /// Collapsing back into the center point.
    Leaving,
}

/// A sampled frame of the dots overlay, in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotsFrame {
    pub width: f32,
    pub height: f32,
    pub dots: [Dot; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub opacity: f32,
}

/// Typing-dots state machine.
pub struct TypingDots {
    phase: DotsPhase,
    /// 0.0 = collapsed in the center, 1.0 = spread out (spring, can
    /// overshoot).
    position: AnimationState<f32>,
    /// Monotonic pulse clock in cycle units; folds into 0..1 per dot.
    cycle: f32,
    /// Unfocused hosts freeze the pulse at the resting pose.
    focused: bool,
}

impl TypingDots {
    pub fn new() -> Self {
        let mut position = AnimationState::new(0.0, Transition::spring(SpringConfig::DOTS));
        position.set_immediate(0.0);
        Self {
            phase: DotsPhase::Hidden,
            position,
            cycle: CYCLE_OFFSET,
            focused: true,
        }
    }

    pub fn phase(&self) -> DotsPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != DotsPhase::Hidden
    }

    /// Show or hide the dots. Showing restarts the periodic pulse; hiding
    /// plays the collapse transition and then stops the clock.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == matches!(self.phase, DotsPhase::Entering | DotsPhase::Shown) {
            return;
        }
        if visible {
            self.phase = DotsPhase::Entering;
            if self.focused {
                self.position.animate_to(1.0);
            } else {
                self.position.set_immediate(1.0);
                self.phase = DotsPhase::Shown;
            }
        } else {
            self.phase = DotsPhase::Leaving;
            if self.focused {
                self.position.animate_to(0.0);
            } else {
                self.position.set_immediate(0.0);
                self.phase = DotsPhase::Hidden;
                self.cycle = CYCLE_OFFSET;
            }
        }
    }

    /// Host focus. While unfocused the pulse clock resets so a resumed
    /// animation starts from the resting pose.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.cycle = CYCLE_OFFSET;
        }
    }

    /// Advance by a frame delta. Returns true while anything is in motion
    /// (the pulse counts: a visible, focused indicator always needs the next
    /// frame).
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.position.advance(dt);

        match self.phase {
            DotsPhase::Entering if !self.position.is_animating() => {
                self.phase = DotsPhase::Shown;
            }
            DotsPhase::Leaving if !self.position.is_animating() => {
                self.phase = DotsPhase::Hidden;
                self.cycle = CYCLE_OFFSET;
            }
            _ => {}
        }

        if self.is_visible() && self.focused {
            self.cycle += dt.as_secs_f32() * 1000.0 / DOT_CYCLE_MS;
            true
        } else {
            self.position.is_animating()
        }
    }

    /// Sample the current frame for a given dot radius, or `None` when
    /// hidden. The frame box is `7r` wide and `2r` tall.
    pub fn frame(&self, dot_radius: f32) -> Option<DotsFrame> {
        if self.phase == DotsPhase::Hidden {
            return None;
        }
        let r = dot_radius;
        let width = r * 2.0 * 3.0 + (r / 2.0) * 2.0;
        let height = r * 2.0;
        let center = (r * 2.0 * 3.0 + (r / 4.0) * 2.0) / 2.0;
        let position = *self.position.current();
        let group_opacity = position.clamp(0.0, 1.0);

        let mut dots = [Dot {
            cx: 0.0,
            cy: r,
            r,
            opacity: 1.0,
        }; 3];
        for (k, dot) in dots.iter_mut().enumerate() {
            let spread = r + k as f32 * (r * DOT_SPACING);
            dot.cx = center + (spread - center) * position;
            let (pulse_r, pulse_opacity) = if self.focused {
                let folded = fold(self.cycle - TIMING_OFFSET * k as f32);
                (
                    keyframes(folded, &[0.0, 0.4, 0.8, 1.0], &[0.8 * r, 0.8 * r, r, r]),
                    keyframes(folded, &[0.0, 0.4, 0.8, 1.0], &[0.3, 0.3, 1.0, 1.0]),
                )
            } else {
                (r, 1.0)
            };
            dot.r = pulse_r;
            dot.opacity = pulse_opacity * group_opacity;
        }

        Some(DotsFrame {
            width,
            height,
            dots,
        })
    }
}

impl Default for TypingDots {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a monotonic clock into a 0..1 triangle wave (up on even units, down
/// on odd).
fn fold(value: f32) -> f32 {
    let modded = value.rem_euclid(2.0);
    if modded > 1.0 {
        1.0 - (modded - 1.0)
    } else {
        modded
    }
}

/// Piecewise-linear keyframe interpolation. `stops` must be ascending and
/// bracket `t`'s clamped range.
fn keyframes(t: f32, stops: &[f32], values: &[f32]) -> f32 {
    debug_assert_eq!(stops.len(), values.len());
    let t = t.clamp(stops[0], stops[stops.len() - 1]);
    for i in 1..stops.len() {
        if t <= stops[i] {
            let span = stops[i] - stops[i - 1];
            if span <= f32::EPSILON {
                return values[i];
            }
            let local = (t - stops[i - 1]) / span;
            return values[i - 1] + (values[i] - values[i - 1]) * local;
        }
    }
    values[values.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_fold_triangle_wave() {
        assert_eq!(fold(0.0), 0.0);
        assert_eq!(fold(0.5), 0.5);
        assert_eq!(fold(1.0), 1.0);
        assert_eq!(fold(1.5), 0.5);
        assert_eq!(fold(2.0), 0.0);
        // 2.8 is not exactly representable, so compare with a tolerance.
        assert!((fold(2.8) - 0.8).abs() < 1e-5);
        assert!((fold(CYCLE_OFFSET) - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_keyframes_plateaus() {
        let stops = [0.0, 0.4, 0.8, 1.0];
        let values = [0.3, 0.3, 1.0, 1.0];
        assert_eq!(keyframes(0.0, &stops, &values), 0.3);
        assert_eq!(keyframes(0.2, &stops, &values), 0.3);
        assert!((keyframes(0.6, &stops, &values) - 0.65).abs() < 1e-5);
        assert_eq!(keyframes(0.9, &stops, &values), 1.0);
        // Clamped outside the range.
        assert_eq!(keyframes(-1.0, &stops, &values), 0.3);
        assert_eq!(keyframes(2.0, &stops, &values), 1.0);
    }

    #[test]
    fn test_hidden_has_no_frame() {
        let dots = TypingDots::new();
        assert_eq!(dots.phase(), DotsPhase::Hidden);
        assert!(dots.frame(4.0).is_none());
    }

    #[test]
    fn test_show_expands_from_center() {
        let mut dots = TypingDots::new();
        dots.set_visible(true);
        assert_eq!(dots.phase(), DotsPhase::Entering);

        let first = dots.frame(4.0).expect("visible");
        // All dots start collapsed at the center.
        let center = first.dots[0].cx;
        assert!(first.dots.iter().all(|d| (d.cx - center).abs() < 1e-5));

        for _ in 0..120 {
            dots.advance(FRAME);
        }
        assert_eq!(dots.phase(), DotsPhase::Shown);
        let spread = dots.frame(4.0).expect("visible");
        assert!(spread.dots[0].cx < spread.dots[1].cx);
        assert!(spread.dots[1].cx < spread.dots[2].cx);
        // Final positions: r + k * 2.5r.
        assert!((spread.dots[0].cx - 4.0).abs() < 0.1);
        assert!((spread.dots[2].cx - 24.0).abs() < 0.3);
    }

    #[test]
    fn test_hide_returns_to_hidden() {
        let mut dots = TypingDots::new();
        dots.set_visible(true);
        for _ in 0..120 {
            dots.advance(FRAME);
        }
        dots.set_visible(false);
        assert_eq!(dots.phase(), DotsPhase::Leaving);
        for _ in 0..120 {
            dots.advance(FRAME);
        }
        assert_eq!(dots.phase(), DotsPhase::Hidden);
        assert!(dots.frame(4.0).is_none());
    }

    #[test]
    fn test_pulse_advances_while_shown() {
        let mut dots = TypingDots::new();
        dots.set_visible(true);
        for _ in 0..120 {
            dots.advance(FRAME);
        }
        let a = dots.frame(4.0).expect("visible");
        // A visible focused indicator keeps requesting frames.
        assert!(dots.advance(Duration::from_millis(120)));
        let b = dots.frame(4.0).expect("visible");
        assert_ne!(a.dots, b.dots);
    }

    #[test]
    fn test_unfocused_rests_and_resets() {
        let mut dots = TypingDots::new();
        dots.set_visible(true);
        for _ in 0..200 {
            dots.advance(FRAME);
        }
        dots.set_focused(false);
        dots.advance(FRAME);
        let rest = dots.frame(4.0).expect("visible");
        for dot in rest.dots {
            assert_eq!(dot.r, 4.0);
            // Group opacity tracks the settled enter spring (within its
            // settle threshold of 1.0).
            assert!((dot.opacity - 1.0).abs() < 0.02);
        }
        assert_eq!(dots.cycle, CYCLE_OFFSET);
    }

    #[test]
    fn test_unfocused_visibility_is_immediate() {
        let mut dots = TypingDots::new();
        dots.set_focused(false);
        dots.set_visible(true);
        assert_eq!(dots.phase(), DotsPhase::Shown);
        dots.set_visible(false);
        assert_eq!(dots.phase(), DotsPhase::Hidden);
    }

    #[test]
    fn test_dots_fit_in_frame_box() {
        let mut dots = TypingDots::new();
        dots.set_visible(true);
        for _ in 0..240 {
            dots.advance(FRAME);
        }
        let frame = dots.frame(4.0).expect("visible");
        for dot in frame.dots {
            assert!(dot.cx - dot.r >= -0.5);
            assert!(dot.cx + dot.r <= frame.width + 0.5);
        }
    }
}
