//! FIFO move animator: plays one layer turn at a time.

use std::collections::VecDeque;

use glam::Vec3;
use web_time::{Duration, Instant};

use super::runner::LayerTurn;
use crate::cube::{parse_sequence, Cubie, MoveToken};
use crate::error::Diagnostic;
use crate::options::AnimationOptions;
use crate::util::easing::EasingFunction;

/// Queues moves and turns one layer at a time.
///
/// A new move never preempts the one in flight. When a turn finishes, its
/// cubies are snapped to the exact discrete orientation so float error
/// never accumulates across moves.
pub struct MoveAnimator {
    queue: VecDeque<MoveToken>,
    active: Option<LayerTurn>,
    duration: Duration,
    easing: EasingFunction,
}

impl MoveAnimator {
    /// Animator with the configured duration and easing.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            queue: VecDeque::new(),
            active: None,
            duration: options.move_duration(),
            easing: options.easing,
        }
    }

    /// Append a move to the queue.
    pub fn enqueue(&mut self, token: MoveToken) {
        self.queue.push_back(token);
    }

    /// Parse a whitespace-separated sequence and queue every valid move.
    ///
    /// Unknown tokens are skipped; one diagnostic is returned per skipped
    /// token and the remaining moves still play.
    pub fn enqueue_str(&mut self, raw: &str) -> Vec<Diagnostic> {
        let (moves, unknown) = parse_sequence(raw);
        self.queue.extend(moves);
        unknown
            .into_iter()
            .map(|token| {
                let diagnostic = Diagnostic::UnknownMoveToken { token };
                diagnostic.log();
                diagnostic
            })
            .collect()
    }

    /// Advance to `now`, mutating `cubies` when a turn finishes.
    ///
    /// Starts the next queued move if idle. Returns the move that completed
    /// during this call, if any. At most one move completes per call.
    pub fn advance(
        &mut self,
        now: Instant,
        cubies: &mut [Cubie],
    ) -> Option<MoveToken> {
        if self.active.is_none() {
            let token = self.queue.pop_front()?;
            let members = token.layer_members(cubies);
            log::debug!("turning {token} ({} cubies)", members.len());
            self.active = Some(LayerTurn::new(
                now,
                token,
                members,
                self.duration,
                self.easing,
            ));
        }

        if !self.active.as_ref()?.is_complete(now) {
            return None;
        }
        let turn = self.active.take()?;
        turn.token().apply_to(cubies, turn.members());
        Some(turn.token())
    }

    /// The in-flight rotation: axis, eased angle, and layer members.
    #[must_use]
    pub fn layer_rotation(
        &self,
        now: Instant,
    ) -> Option<(Vec3, f32, &[usize])> {
        self.active
            .as_ref()
            .map(|turn| (turn.axis(), turn.angle(now), turn.members()))
    }

    /// The move currently turning, if any.
    #[must_use]
    pub fn current(&self) -> Option<MoveToken> {
        self.active.as_ref().map(LayerTurn::token)
    }

    /// Moves waiting behind the current one.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is turning and nothing is queued.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }

    /// Drop the in-flight turn without snapping; queued moves remain.
    pub fn abandon_active(&mut self) {
        if let Some(turn) = self.active.take() {
            log::debug!("abandoning in-flight {}", turn.token());
        }
    }

    /// Drop the queue and the in-flight turn.
    pub fn clear(&mut self) {
        self.abandon_active();
        self.queue.clear();
    }
}

impl std::fmt::Debug for MoveAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveAnimator")
            .field("active", &self.active)
            .field("pending", &self.queue.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{
        build_cubies, facelets_from_cubies, CubeState, FaceId, FaceletState,
        Turn,
    };

    const STEP: Duration = Duration::from_millis(300);

    fn setup() -> (MoveAnimator, Vec<Cubie>) {
        let animator = MoveAnimator::new(&AnimationOptions::default());
        let cubies = build_cubies(&CubeState::from(FaceletState::solved()));
        (animator, cubies)
    }

    fn run_to_idle(
        animator: &mut MoveAnimator,
        cubies: &mut [Cubie],
        start: Instant,
    ) -> Vec<MoveToken> {
        let mut completed = Vec::new();
        let mut now = start;
        for _ in 0..100 {
            if animator.is_idle() {
                break;
            }
            completed.extend(animator.advance(now, cubies));
            now += Duration::from_millis(50);
        }
        completed
    }

    #[test]
    fn idle_advance_does_nothing() {
        let (mut animator, mut cubies) = setup();
        let before = cubies.clone();
        assert_eq!(animator.advance(Instant::now(), &mut cubies), None);
        assert_eq!(cubies, before);
        assert!(animator.is_idle());
    }

    #[test]
    fn one_move_at_a_time() {
        let (mut animator, mut cubies) = setup();
        let t0 = Instant::now();
        animator.enqueue(MoveToken::new(FaceId::R, Turn::Clockwise));
        animator.enqueue(MoveToken::new(FaceId::U, Turn::Clockwise));

        assert_eq!(animator.advance(t0, &mut cubies), None);
        assert_eq!(
            animator.current(),
            Some(MoveToken::new(FaceId::R, Turn::Clockwise))
        );
        assert_eq!(animator.pending(), 1);

        let (axis, angle, members) =
            animator.layer_rotation(t0 + STEP / 2).unwrap();
        assert_eq!(axis, Vec3::X);
        assert!(angle < 0.0 && angle > -std::f32::consts::FRAC_PI_2);
        assert_eq!(members.len(), 9);

        assert_eq!(
            animator.advance(t0 + STEP, &mut cubies),
            Some(MoveToken::new(FaceId::R, Turn::Clockwise))
        );
        assert_eq!(animator.current(), None);
        assert_eq!(animator.advance(t0 + STEP, &mut cubies), None);
        assert_eq!(
            animator.current(),
            Some(MoveToken::new(FaceId::U, Turn::Clockwise))
        );
    }

    #[test]
    fn completions_are_fifo_and_match_discrete_moves() {
        let (mut animator, mut cubies) = setup();
        let diagnostics = animator.enqueue_str("R U R' U'");
        assert!(diagnostics.is_empty());

        let completed = run_to_idle(&mut animator, &mut cubies, Instant::now());
        let (expected, _) = parse_sequence("R U R' U'");
        assert_eq!(completed, expected);
        assert_eq!(
            facelets_from_cubies(&cubies),
            FaceletState::solved().apply_moves(&expected)
        );
    }

    #[test]
    fn unknown_tokens_are_skipped() {
        let (mut animator, mut cubies) = setup();
        let diagnostics = animator.enqueue_str("R Q2 U");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnknownMoveToken { token: "Q2".into() }]
        );
        let completed = run_to_idle(&mut animator, &mut cubies, Instant::now());
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn abandoned_turn_leaves_cubies_untouched() {
        let (mut animator, mut cubies) = setup();
        let before = cubies.clone();
        let t0 = Instant::now();
        animator.enqueue(MoveToken::new(FaceId::F, Turn::Double));
        animator.enqueue(MoveToken::new(FaceId::D, Turn::Clockwise));
        let _ = animator.advance(t0, &mut cubies);
        animator.abandon_active();
        assert_eq!(cubies, before);
        assert_eq!(animator.pending(), 1);

        animator.clear();
        assert!(animator.is_idle());
        assert_eq!(animator.advance(t0 + STEP, &mut cubies), None);
        assert_eq!(cubies, before);
    }
}
