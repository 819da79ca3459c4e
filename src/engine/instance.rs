//! One live cube viewer bound to a host container.

use web_time::Instant;

use super::host::{FrameHandle, ListenerSet, RenderSurface, ViewerHost};
use crate::animation::MoveAnimator;
use crate::camera::controller::{CameraState, OrbitController};
use crate::cube::{build_cubies, CubeState, FaceletState, MoveToken};
use crate::error::Diagnostic;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::CubeScene;
use crate::util::frame_timing::FrameTiming;

/// A move that finished during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCompletion {
    /// The move that finished.
    pub token: MoveToken,
    /// Moves still queued behind it.
    pub remaining: usize,
}

/// Surface, scene, camera, input, animation, and render-loop scheduling
/// for one container.
///
/// An instance is inert until [`attach`](Self::attach) succeeds, and inert
/// again after [`destroy`](Self::destroy). While inert it schedules no
/// frames and ignores input, but state updates still land in the scene.
pub struct ViewerInstance {
    slot: String,
    options: Options,
    container: Option<String>,
    surface: Option<Box<dyn RenderSurface>>,
    listeners: Option<ListenerSet>,
    frame: Option<FrameHandle>,
    scene: CubeScene,
    orbit: OrbitController,
    input: InputProcessor,
    animator: MoveAnimator,
    timing: FrameTiming,
}

impl ViewerInstance {
    /// Unattached viewer showing an all-neutral cube.
    #[must_use]
    pub fn new(slot: impl Into<String>, options: Options) -> Self {
        Self {
            slot: slot.into(),
            container: None,
            surface: None,
            listeners: None,
            frame: None,
            scene: CubeScene::default(),
            orbit: OrbitController::new(&options.camera),
            input: InputProcessor::new(),
            animator: MoveAnimator::new(&options.animation),
            timing: FrameTiming::new(),
            options,
        }
    }

    /// Slot name this viewer was created for.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Container the viewer is bound to, while live.
    #[must_use]
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Bind to `container`: take its surface, attach listeners, and
    /// schedule the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`Diagnostic::MissingTarget`] if the host cannot resolve the
    /// container; the instance then stays inert.
    pub fn attach<H: ViewerHost + ?Sized>(
        &mut self,
        container: &str,
        host: &mut H,
    ) -> Result<(), Diagnostic> {
        if self.is_live() {
            log::debug!("viewer '{}' already attached", self.slot);
            return Ok(());
        }
        let Some(surface) = host.resolve_surface(container) else {
            return Err(Diagnostic::MissingTarget {
                slot: self.slot.clone(),
                container: container.to_owned(),
            });
        };
        self.surface = Some(surface);
        self.listeners = Some(host.attach_listeners(container));
        self.frame = Some(host.request_frame());
        self.container = Some(container.to_owned());
        log::info!("viewer '{}' attached to '{container}'", self.slot);
        Ok(())
    }

    /// Whether the viewer holds a surface.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.surface.is_some()
    }

    /// Replace the displayed state.
    ///
    /// The new cube group is built completely before it is swapped in. An
    /// in-flight turn is dropped without completing; queued moves play on
    /// the new state.
    pub fn update_state(&mut self, state: &CubeState) {
        let cubies = build_cubies(state);
        self.animator.abandon_active();
        self.scene.replace(cubies);
    }

    /// Facelet colors currently shown (including finished moves).
    #[must_use]
    pub fn facelets(&self) -> FaceletState {
        self.scene.facelets()
    }

    /// The cube group.
    #[must_use]
    pub fn scene(&self) -> &CubeScene {
        &self.scene
    }

    /// Queue one move.
    pub fn enqueue_move(&mut self, token: MoveToken) {
        self.animator.enqueue(token);
    }

    /// Queue a move sequence; returns a diagnostic per skipped token.
    pub fn enqueue_sequence(&mut self, raw: &str) -> Vec<Diagnostic> {
        self.animator.enqueue_str(raw)
    }

    /// Moves queued or turning.
    #[must_use]
    pub fn moves_in_flight(&self) -> usize {
        self.animator.pending() + usize::from(self.animator.current().is_some())
    }

    /// Feed a raw input event to the camera. Ignored unless listeners are
    /// attached. Returns whether the camera changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.listeners.is_none() {
            return false;
        }
        let Some(command) = self.input.handle_event(event) else {
            return false;
        };
        let before = self.orbit.state();
        self.orbit.apply(command);
        self.orbit.state() != before
    }

    /// Current yaw/pitch/zoom.
    #[must_use]
    pub fn camera_state(&self) -> CameraState {
        self.orbit.state()
    }

    /// Restore the initial camera pose.
    pub fn reset_camera(&mut self) {
        self.orbit.reset();
    }

    /// Resize the surface; the aspect ratio follows on the next frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
    }

    /// Frame callback currently scheduled for this viewer.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Run one frame: advance the animation, draw, schedule the next frame.
    ///
    /// Handles other than the one this viewer scheduled are ignored.
    pub fn on_frame<H: ViewerHost + ?Sized>(
        &mut self,
        handle: FrameHandle,
        now: Instant,
        host: &mut H,
    ) -> Option<MoveCompletion> {
        if self.frame != Some(handle) {
            log::debug!(
                "viewer '{}' ignoring stale frame {handle:?}",
                self.slot
            );
            return None;
        }
        self.frame = None;

        let completed = self
            .animator
            .advance(now, self.scene.cubies_mut())
            .map(|token| MoveCompletion {
                token,
                remaining: self.animator.pending(),
            });
        if let Some(done) = &completed {
            log::debug!(
                "viewer '{}' finished {} ({} remaining)",
                self.slot,
                done.token,
                done.remaining
            );
        }

        self.draw(now);
        self.frame = Some(host.request_frame());
        completed
    }

    fn draw(&mut self, now: Instant) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let (width, height) = surface.size();
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let camera = self.orbit.camera(aspect);
        let frame = self.scene.frame(
            &camera,
            self.animator.layer_rotation(now),
            &self.options,
        );
        surface.draw(&frame);
        self.timing.record(now);
    }

    /// Stop the render loop, detach listeners, and release the surface.
    ///
    /// Safe to call more than once and on a viewer that never attached.
    pub fn destroy<H: ViewerHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(handle) = self.frame.take() {
            host.cancel_frame(handle);
        }
        if let Some(listeners) = self.listeners.take() {
            host.detach_listeners(listeners);
        }
        self.input.release();
        self.animator.clear();
        if self.surface.take().is_some() {
            log::info!(
                "viewer '{}' destroyed after {} frames",
                self.slot,
                self.timing.frames()
            );
        } else {
            log::debug!("viewer '{}' already inert", self.slot);
        }
        self.container = None;
    }
}

impl std::fmt::Debug for ViewerInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerInstance")
            .field("slot", &self.slot)
            .field("container", &self.container)
            .field("frame", &self.frame)
            .field("listeners", &self.listeners)
            .field("animator", &self.animator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::cube::{FaceId, Turn};
    use crate::engine::testing::RecordingHost;
    use crate::input::MouseButton;

    fn attached() -> (ViewerInstance, RecordingHost) {
        let mut host = RecordingHost::with_containers(&["canvas"]);
        let mut viewer = ViewerInstance::new("preview", Options::default());
        viewer.attach("canvas", &mut host).unwrap();
        (viewer, host)
    }

    #[test]
    fn attach_schedules_one_frame_and_listeners() {
        let (viewer, host) = attached();
        assert!(viewer.is_live());
        assert_eq!(host.pending_frames(), 1);
        assert_eq!(host.attached_listeners(), 1);
        assert_eq!(viewer.container(), Some("canvas"));
    }

    #[test]
    fn missing_container_stays_inert() {
        let mut host = RecordingHost::with_containers(&[]);
        let mut viewer = ViewerInstance::new("preview", Options::default());
        let err = viewer.attach("nowhere", &mut host).unwrap_err();
        assert!(matches!(err, Diagnostic::MissingTarget { .. }));
        assert!(!viewer.is_live());
        assert_eq!(host.pending_frames(), 0);
        assert_eq!(host.attached_listeners(), 0);
    }

    #[test]
    fn frame_draws_and_reschedules() {
        let (mut viewer, mut host) = attached();
        let now = Instant::now();
        for handle in host.take_pending() {
            assert_eq!(viewer.on_frame(handle, now, &mut host), None);
        }
        assert_eq!(host.draws(), 1);
        assert_eq!(host.pending_frames(), 1);
    }

    #[test]
    fn stale_frame_is_ignored() {
        let (mut viewer, mut host) = attached();
        assert_eq!(
            viewer.on_frame(FrameHandle(9_999), Instant::now(), &mut host),
            None
        );
        assert_eq!(host.draws(), 0);
        assert_eq!(host.pending_frames(), 1);
    }

    #[test]
    fn update_state_is_idempotent() {
        let (mut viewer, _host) = attached();
        let state = CubeState::from(FaceletState::solved().apply_move(
            MoveToken::new(FaceId::F, Turn::Clockwise),
        ));
        viewer.update_state(&state);
        let once = viewer.facelets();
        viewer.update_state(&state);
        assert_eq!(viewer.facelets(), once);
        assert_eq!(viewer.scene().cubies().len(), 27);
    }

    #[test]
    fn update_mid_turn_abandons_without_completion() {
        let (mut viewer, mut host) = attached();
        viewer.enqueue_move(MoveToken::new(FaceId::R, Turn::Clockwise));
        viewer.enqueue_move(MoveToken::new(FaceId::U, Turn::Clockwise));
        let t0 = Instant::now();
        let handle = host.take_pending()[0];
        assert_eq!(viewer.on_frame(handle, t0, &mut host), None);

        viewer.update_state(&FaceletState::solved().into());
        assert_eq!(viewer.moves_in_flight(), 1);

        let mut completed = Vec::new();
        let mut now = t0;
        for _ in 0..20 {
            now += Duration::from_millis(100);
            for handle in host.take_pending() {
                completed.extend(viewer.on_frame(handle, now, &mut host));
            }
        }
        assert_eq!(
            completed,
            vec![MoveCompletion {
                token: MoveToken::new(FaceId::U, Turn::Clockwise),
                remaining: 0,
            }]
        );
        assert_eq!(
            viewer.facelets(),
            FaceletState::solved()
                .apply_move(MoveToken::new(FaceId::U, Turn::Clockwise))
        );
    }

    #[test]
    fn input_requires_listeners() {
        let mut viewer = ViewerInstance::new("preview", Options::default());
        assert!(!viewer.handle_input(InputEvent::Scroll { delta: 1.0 }));

        let (mut viewer, _host) = attached();
        let before = viewer.camera_state();
        let _ = viewer.handle_input(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = viewer.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert!(
            viewer.handle_input(InputEvent::CursorMoved { x: 100.0, y: 0.0 })
        );
        let after = viewer.camera_state();
        assert!((after.yaw - before.yaw - 1.0).abs() < 1e-5);

        viewer.reset_camera();
        assert_eq!(viewer.camera_state(), before);
    }

    #[test]
    fn destroy_is_idempotent() {
        let (mut viewer, mut host) = attached();
        viewer.destroy(&mut host);
        viewer.destroy(&mut host);
        assert!(!viewer.is_live());
        assert_eq!(host.pending_frames(), 0);
        assert_eq!(host.attached_listeners(), 0);
        assert_eq!(host.detach_calls(), 1);
        assert!(!viewer.handle_input(InputEvent::Scroll { delta: 1.0 }));

        let mut never = ViewerInstance::new("other", Options::default());
        never.destroy(&mut host);
        assert_eq!(host.detach_calls(), 1);
    }
}
