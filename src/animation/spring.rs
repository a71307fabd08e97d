/// Configuration for spring physics animation.
///
/// With mass 1 this is the classic damped oscillator; the presets mirror the
/// feel of the badge, avatar, and typing-dots transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

impl SpringConfig {
    /// Default spring with pleasant overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
    };

    /// Standalone badge morphs: stiff and heavily damped, settles without
    /// wobble.
    pub const BADGE: Self = Self {
        mass: 1.0,
        stiffness: 600.0,
        damping: 70.0,
    };

    /// Avatar compound mask: even stiffer so the cutout keeps up with the
    /// badge it frames.
    pub const AVATAR: Self = Self {
        mass: 1.0,
        stiffness: 1200.0,
        damping: 70.0,
    };

    /// Typing-dots enter/leave: quick with a hint of bounce.
    pub const DOTS: Self = Self {
        mass: 1.0,
        stiffness: 900.0,
        damping: 50.0,
    };
}

/// State for spring physics simulation
#[derive(Clone, Debug)]
pub struct SpringState {
    /// Current position (0.0 = start, 1.0 = target)
    pub position: f32,
    /// Current velocity
    pub velocity: f32,
    /// Last evaluation time
    pub last_t: f32,
}

impl SpringState {
    /// Create a new spring state starting at position 0.0
    pub fn new() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            last_t: 0.0,
        }
    }

    /// Step the spring simulation forward using real elapsed time in seconds.
    /// Unlike normalized time (0.0 to 1.0), this allows the spring to continue
    /// oscillating until it naturally settles, regardless of any duration
    /// setting.
    ///
    /// `elapsed_secs` - Total elapsed time since animation started, in seconds
    /// Returns the current position (can overshoot 1.0)
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let dt = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = elapsed_secs;

        // Skip if time hasn't advanced
        if dt < 1e-6 {
            return self.position;
        }

        // Target is always 1.0 (we're animating from 0 to 1)
        let target = 1.0;

        // Cap individual timestep for numerical stability (~30fps minimum)
        let max_dt = 0.033;
        let capped_dt = dt.min(max_dt);

        // Spring force: F = -k * x
        let displacement = self.position - target;
        let spring_force = -config.stiffness * displacement;

        // Damping force: F = -c * v
        let damping_force = -config.damping * self.velocity;

        let force = spring_force + damping_force;
        let acceleration = force / config.mass;

        // Semi-implicit Euler
        self.velocity += acceleration * capped_dt;
        self.position += self.velocity * capped_dt;

        self.position
    }

    /// Check if the spring has settled (position near target, velocity near zero)
    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_reaches_target() {
        let mut state = SpringState::new();
        let config = SpringConfig::BADGE;

        // Simulate spring over 2 seconds at 60fps
        let mut position = 0.0;
        for i in 0..120 {
            let elapsed_secs = i as f32 / 60.0;
            position = state.step(elapsed_secs, &config);
        }

        assert!(
            (position - 1.0).abs() < 0.05,
            "Spring should settle near target, got {}",
            position
        );
    }

    #[test]
    fn test_badge_spring_is_overdamped() {
        // The badge morph spring must not wobble past its target shape.
        let mut state = SpringState::new();
        let config = SpringConfig::BADGE;

        let mut max_position: f32 = 0.0;
        for i in 0..240 {
            let elapsed_secs = i as f32 / 60.0;
            max_position = max_position.max(state.step(elapsed_secs, &config));
        }

        assert!(
            max_position <= 1.001,
            "Badge spring should not overshoot, max was {}",
            max_position
        );
    }

    #[test]
    fn test_default_spring_overshoots() {
        let mut state = SpringState::new();
        let config = SpringConfig::DEFAULT;

        let mut max_position: f32 = 0.0;
        for i in 0..120 {
            let elapsed_secs = i as f32 / 60.0;
            max_position = max_position.max(state.step(elapsed_secs, &config));
        }

        assert!(
            max_position > 1.0,
            "Default spring should overshoot, max was {}",
            max_position
        );
    }

    #[test]
    fn test_avatar_spring_settles_no_slower_than_badge() {
        let settle = |config: SpringConfig| {
            let mut state = SpringState::new();
            for i in 0..600 {
                state.step(i as f32 / 60.0, &config);
                if state.is_settled(0.01) {
                    return i;
                }
            }
            600
        };
        assert!(settle(SpringConfig::AVATAR) <= settle(SpringConfig::BADGE));
    }
}
