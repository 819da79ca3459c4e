//! Runner for a single layer turn.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::cube::MoveToken;
use crate::util::easing::EasingFunction;

/// One in-flight layer rotation.
///
/// The runner holds:
/// - The move being played and the cubie indices captured when it began
/// - Timing information
/// - The easing curve applied to the rotation angle
pub struct LayerTurn {
    /// When the turn started.
    start_time: Instant,
    /// Total duration of the turn.
    duration: Duration,
    /// Easing applied to the angle.
    easing: EasingFunction,
    /// The move being animated.
    token: MoveToken,
    /// Indices of the cubies in the turning layer.
    members: Vec<usize>,
}

impl LayerTurn {
    /// Start a turn at `start_time`.
    #[must_use]
    pub fn new(
        start_time: Instant,
        token: MoveToken,
        members: Vec<usize>,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_time,
            duration,
            easing,
            token,
            members,
        }
    }

    /// The move being animated.
    #[must_use]
    pub fn token(&self) -> MoveToken {
        self.token
    }

    /// Cubie indices in the turning layer.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Rotation axis (the face's outward normal).
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.token.face.normal().as_vec3()
    }

    /// Calculate normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the turn has reached completion.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased rotation angle in radians at `now`.
    #[must_use]
    pub fn angle(&self, now: Instant) -> f32 {
        self.token.angle() * self.easing.evaluate(self.progress(now))
    }
}

impl std::fmt::Debug for LayerTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerTurn")
            .field("token", &self.token)
            .field("members", &self.members.len())
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::cube::{FaceId, Turn};

    fn turn(turn: Turn, easing: EasingFunction) -> (LayerTurn, Instant) {
        let start = Instant::now();
        let runner = LayerTurn::new(
            start,
            MoveToken::new(FaceId::R, turn),
            vec![0, 1, 2],
            Duration::from_millis(200),
            easing,
        );
        (runner, start)
    }

    #[test]
    fn progress_is_clamped() {
        let (runner, start) = turn(Turn::Clockwise, EasingFunction::Linear);
        assert_eq!(runner.progress(start), 0.0);
        let mid = runner.progress(start + Duration::from_millis(100));
        assert!((mid - 0.5).abs() < 1e-4);
        assert_eq!(runner.progress(start + Duration::from_secs(5)), 1.0);
        assert!(runner.is_complete(start + Duration::from_millis(200)));
    }

    #[test]
    fn linear_angle_is_proportional() {
        let (runner, start) = turn(Turn::Clockwise, EasingFunction::Linear);
        let half = runner.angle(start + Duration::from_millis(100));
        assert!((half + FRAC_PI_2 / 2.0).abs() < 1e-4);
        let end = runner.angle(start + Duration::from_millis(200));
        assert!((end + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn double_turn_ends_at_half_circle() {
        let (runner, start) = turn(Turn::Double, EasingFunction::DEFAULT);
        let end = runner.angle(start + Duration::from_millis(200));
        assert!((end.abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let start = Instant::now();
        let runner = LayerTurn::new(
            start,
            MoveToken::new(FaceId::U, Turn::CounterClockwise),
            Vec::new(),
            Duration::ZERO,
            EasingFunction::Linear,
        );
        assert!(runner.is_complete(start));
        assert_eq!(runner.axis(), Vec3::Y);
    }
}
