//! The animation driver: given a "from" and a "to" snapshot plus a
//! transition configuration, produce the interpolated snapshot stream.
//!
//! The driver is advanced by an external clock ([`AnimationState::advance`]
//! takes the frame delta); it owns no timers and does no scheduling of its
//! own, so a host can tick it from any frame source and tests can drive it
//! deterministically.

use std::time::Duration;

use super::{Animatable, SpringState, TimingFunction, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Interpolation state for one animated property.
///
/// Retargeting is last-write-wins: [`AnimationState::animate_to`] supersedes
/// any in-flight interpolation, restarting from the current interpolated
/// value. Intermediate targets are never queued.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Latest target
    target: T,
    /// Value when the current animation started
    start: T,
    /// Progress from 0.0 to 1.0 (or beyond for overshoot)
    progress: f32,
    /// Time accumulated since the current animation started
    elapsed: Duration,
    /// Transition configuration
    transition: Transition,
    /// Spring state (for spring timing functions)
    spring_state: Option<SpringState>,
    /// Whether the animation has been initialized with its first real value
    initialized: bool,
    /// Previous value for change detection
    prev_value: Option<T>,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        let spring_state = if matches!(transition.timing, TimingFunction::Spring(_)) {
            Some(SpringState::new())
        } else {
            None
        };
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            elapsed: Duration::ZERO,
            transition,
            spring_state,
            initialized: false,
            prev_value: None,
        }
    }

    /// Start animating to a new target value
    pub fn animate_to(&mut self, new_target: T) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.elapsed = Duration::ZERO;
        // Reset spring state for new animation
        if self.spring_state.is_some() {
            self.spring_state = Some(SpringState::new());
        }
    }

    /// Advance the animation by a frame delta and return whether the value
    /// changed.
    pub fn advance(&mut self, dt: Duration) -> AdvanceResult<T> {
        if self.progress >= 1.0 {
            // Completed, or a spring that has settled.
            return AdvanceResult::NoChange;
        }

        self.elapsed += dt;
        let elapsed_ms = self.elapsed.as_secs_f32() * 1000.0;
        let adjusted_elapsed = (elapsed_ms - self.transition.delay_ms).max(0.0);

        if adjusted_elapsed <= 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        // Calculate eased value based on timing function type
        let eased_t = if let Some(ref mut spring_state) = self.spring_state {
            // Springs run on real elapsed time so they keep oscillating until
            // they settle, regardless of the configured duration.
            if let TimingFunction::Spring(ref config) = self.transition.timing {
                spring_state.step(adjusted_elapsed / 1000.0, config)
            } else {
                adjusted_elapsed / self.transition.duration_ms
            }
        } else {
            let t = (adjusted_elapsed / self.transition.duration_ms).min(1.0);
            self.transition.timing.evaluate(t)
        };

        let new_value = T::lerp(&self.start, &self.target, eased_t);

        // Update progress
        if let Some(ref state) = self.spring_state {
            if state.is_settled(0.01) {
                self.progress = 1.0;
            } else {
                self.progress = 0.5;
            }
        } else {
            self.progress = (adjusted_elapsed / self.transition.duration_ms).min(1.0);
        }

        let changed = self.prev_value.as_ref() != Some(&new_value);
        self.current = new_value.clone();
        self.prev_value = Some(new_value.clone());

        if changed {
            AdvanceResult::Changed(new_value)
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Set value immediately without animation (for initialization)
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
        self.initialized = true;
    }

    /// Check if animation has never been initialized
    pub fn is_initial(&self) -> bool {
        !self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SpringConfig;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_new_starts_completed() {
        let state = AnimationState::new(0.0f32, Transition::new(300.0, TimingFunction::Linear));
        assert_eq!(*state.current(), 0.0);
        assert!(!state.is_animating());
        assert!(state.is_initial());
    }

    #[test]
    fn test_animate_to_starts_animation() {
        let mut state =
            AnimationState::new(0.0f32, Transition::new(300.0, TimingFunction::Linear));
        state.animate_to(100.0);
        assert_eq!(*state.target(), 100.0);
        assert!(state.is_animating());
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut state =
            AnimationState::new(0.0f32, Transition::new(100.0, TimingFunction::Linear));
        state.animate_to(100.0);
        for _ in 0..4 {
            state.advance(FRAME);
        }
        let mid = *state.current();
        // Retargeting to the in-flight target must not restart interpolation.
        state.animate_to(100.0);
        assert!(*state.current() >= mid);
        state.advance(FRAME);
        assert!(*state.current() > mid);
    }

    #[test]
    fn test_linear_completes_after_duration() {
        let mut state =
            AnimationState::new(0.0f32, Transition::new(160.0, TimingFunction::Linear));
        state.animate_to(10.0);
        for _ in 0..10 {
            state.advance(FRAME);
        }
        assert_eq!(*state.current(), 10.0);
        assert!(!state.is_animating());
        // Settled animations report no further changes.
        assert_eq!(state.advance(FRAME), AdvanceResult::NoChange);
    }

    #[test]
    fn test_retarget_restarts_from_current_value() {
        let mut state =
            AnimationState::new(0.0f32, Transition::new(160.0, TimingFunction::Linear));
        state.animate_to(10.0);
        for _ in 0..5 {
            state.advance(FRAME);
        }
        let mid = *state.current();
        assert!(mid > 0.0 && mid < 10.0);

        // Last-write-wins: the old target is discarded.
        state.animate_to(-10.0);
        assert_eq!(*state.target(), -10.0);
        state.advance(FRAME);
        assert!(*state.current() < mid);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut state = AnimationState::new(
            0.0f32,
            Transition::spring(SpringConfig::BADGE),
        );
        state.animate_to(1.0);
        for _ in 0..300 {
            state.advance(FRAME);
        }
        assert!(!state.is_animating());
        assert!((*state.current() - 1.0).abs() < 0.02);
    }

    #[test]
    fn test_delay_holds_value() {
        let mut state = AnimationState::new(
            0.0f32,
            Transition::new(100.0, TimingFunction::Linear).delay(100.0),
        );
        state.animate_to(10.0);
        assert_eq!(state.advance(Duration::from_millis(50)), AdvanceResult::NoChange);
        assert_eq!(*state.current(), 0.0);
        state.advance(Duration::from_millis(100));
        assert!(*state.current() > 0.0);
    }

    #[test]
    fn test_set_immediate() {
        let mut state =
            AnimationState::new(0.0f32, Transition::new(300.0, TimingFunction::Linear));
        state.set_immediate(50.0);
        assert_eq!(*state.current(), 50.0);
        assert_eq!(*state.target(), 50.0);
        assert!(!state.is_animating());
        assert!(!state.is_initial());
    }
}
