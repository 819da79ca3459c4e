//! Slot name → live viewer, with destroy-before-recreate semantics.
//!
//! The registry is the control surface collaborators drive: `init`,
//! `update_state`, `animate_move`, `destroy`. None of its calls fail.
//! Problems are logged and queued as [`ViewerEvent::Diagnostic`] for the
//! caller to drain.

use rustc_hash::FxHashMap;
use web_time::Instant;

use super::event::ViewerEvent;
use super::host::{FrameHandle, ViewerHost};
use super::instance::ViewerInstance;
use crate::cube::{CubeState, MoveToken};
use crate::error::Diagnostic;
use crate::input::InputEvent;
use crate::options::Options;

/// Owns the host and every live viewer.
pub struct ViewerRegistry<H: ViewerHost> {
    host: H,
    options: Options,
    viewers: FxHashMap<String, ViewerInstance>,
    events: Vec<ViewerEvent>,
}

impl<H: ViewerHost> ViewerRegistry<H> {
    /// Empty registry; new viewers are created with `options`.
    #[must_use]
    pub fn new(host: H, options: Options) -> Self {
        Self {
            host,
            options,
            viewers: FxHashMap::default(),
            events: Vec::new(),
        }
    }

    /// Create the viewer for `slot`, bound to `container_id`.
    ///
    /// Any viewer already in the slot is destroyed first. Returns whether
    /// the new viewer is live; a missing container leaves the slot empty.
    pub fn init(&mut self, slot: &str, container_id: &str) -> bool {
        let _ = self.destroy(slot);
        let mut viewer = ViewerInstance::new(slot, self.options.clone());
        match viewer.attach(container_id, &mut self.host) {
            Ok(()) => {
                let _ = self.viewers.insert(slot.to_owned(), viewer);
                true
            }
            Err(diagnostic) => {
                self.report(diagnostic);
                false
            }
        }
    }

    /// Replace the state shown in `slot`.
    pub fn update_state(&mut self, slot: &str, state: &CubeState) -> bool {
        let Some(viewer) = self.viewer_mut(slot) else {
            return false;
        };
        viewer.update_state(state);
        true
    }

    /// Parse a JSON facelet object and show it in `slot`.
    ///
    /// Recoverable defects (missing faces, bad labels) are reported and
    /// rendered neutral. JSON that cannot be read at all is reported and
    /// the previous state stays on screen.
    pub fn update_state_json(&mut self, slot: &str, json: &str) -> bool {
        if !self.has_slot(slot) {
            return false;
        }
        match CubeState::from_json(json) {
            Ok((state, diagnostics)) => {
                for diagnostic in diagnostics {
                    self.report(diagnostic);
                }
                self.update_state(slot, &state)
            }
            Err(e) => {
                self.report(Diagnostic::MalformedState {
                    message: e.to_string(),
                });
                false
            }
        }
    }

    /// Queue one move given in notation (`"R"`, `"U'"`, `"F2"`).
    pub fn animate_move(&mut self, slot: &str, token: &str) -> bool {
        let token = match token.parse::<MoveToken>() {
            Ok(token) => token,
            Err(e) => {
                self.report(Diagnostic::UnknownMoveToken { token: e.token });
                return false;
            }
        };
        let Some(viewer) = self.viewer_mut(slot) else {
            return false;
        };
        viewer.enqueue_move(token);
        true
    }

    /// Queue a whitespace-separated move sequence. Unknown tokens are
    /// skipped and reported; returns the number of moves in flight.
    pub fn animate_sequence(&mut self, slot: &str, sequence: &str) -> usize {
        let Some(viewer) = self.viewer_mut(slot) else {
            return 0;
        };
        let diagnostics = viewer.enqueue_sequence(sequence);
        let in_flight = viewer.moves_in_flight();
        self.events
            .extend(diagnostics.into_iter().map(ViewerEvent::Diagnostic));
        in_flight
    }

    /// Route an input event to the viewer in `slot`.
    pub fn handle_input(&mut self, slot: &str, event: InputEvent) -> bool {
        self.viewer_mut(slot)
            .is_some_and(|viewer| viewer.handle_input(event))
    }

    /// Resize the surface of `slot`.
    pub fn resize(&mut self, slot: &str, width: u32, height: u32) {
        if let Some(viewer) = self.viewer_mut(slot) {
            viewer.resize(width, height);
        }
    }

    /// Restore the initial camera pose of `slot`.
    pub fn reset_camera(&mut self, slot: &str) {
        if let Some(viewer) = self.viewer_mut(slot) {
            viewer.reset_camera();
        }
    }

    /// Deliver a fired frame callback to the viewer that scheduled it.
    pub fn on_frame(&mut self, handle: FrameHandle, now: Instant) {
        let Some((slot, viewer)) = self
            .viewers
            .iter_mut()
            .find(|(_, viewer)| viewer.pending_frame() == Some(handle))
        else {
            log::debug!("no viewer owns frame {handle:?}");
            return;
        };
        if let Some(done) = viewer.on_frame(handle, now, &mut self.host) {
            self.events.push(ViewerEvent::MoveCompleted {
                slot: slot.clone(),
                token: done.token,
                remaining: done.remaining,
            });
        }
    }

    /// Destroy the viewer in `slot`, if any. Returns whether one existed.
    pub fn destroy(&mut self, slot: &str) -> bool {
        let Some(mut viewer) = self.viewers.remove(slot) else {
            log::debug!("destroy: slot '{slot}' is empty");
            return false;
        };
        viewer.destroy(&mut self.host);
        true
    }

    /// Destroy every viewer.
    pub fn destroy_all(&mut self) {
        for (_, mut viewer) in self.viewers.drain() {
            viewer.destroy(&mut self.host);
        }
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.events)
    }

    /// The viewer in `slot`.
    #[must_use]
    pub fn instance(&self, slot: &str) -> Option<&ViewerInstance> {
        self.viewers.get(slot)
    }

    /// Whether `slot` holds a live viewer.
    #[must_use]
    pub fn contains(&self, slot: &str) -> bool {
        self.viewers.contains_key(slot)
    }

    /// Number of live viewers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    /// Whether no viewer is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.events.push(ViewerEvent::Diagnostic(diagnostic));
    }

    fn has_slot(&mut self, slot: &str) -> bool {
        if self.viewers.contains_key(slot) {
            return true;
        }
        self.report(Diagnostic::UnknownSlot {
            slot: slot.to_owned(),
        });
        false
    }

    fn viewer_mut(&mut self, slot: &str) -> Option<&mut ViewerInstance> {
        if !self.has_slot(slot) {
            return None;
        }
        self.viewers.get_mut(slot)
    }
}

impl<H: ViewerHost> std::fmt::Debug for ViewerRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerRegistry")
            .field("viewers", &self.viewers.len())
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::cube::{parse_sequence, FaceId, FaceletState, Turn};
    use crate::engine::testing::RecordingHost;
    use crate::input::MouseButton;

    fn registry() -> ViewerRegistry<RecordingHost> {
        ViewerRegistry::new(
            RecordingHost::with_containers(&[
                "preview-canvas",
                "solution-canvas",
            ]),
            Options::default(),
        )
    }

    /// Fire frames every 50 ms until nothing is animating or `limit` runs
    /// out.
    fn pump(registry: &mut ViewerRegistry<RecordingHost>, limit: usize) {
        let mut now = Instant::now();
        for _ in 0..limit {
            for handle in registry.host_mut().take_pending() {
                registry.on_frame(handle, now);
            }
            now += Duration::from_millis(50);
        }
    }

    fn completions(events: &[ViewerEvent]) -> Vec<(String, MoveToken, usize)> {
        events
            .iter()
            .filter_map(|event| match event {
                ViewerEvent::MoveCompleted {
                    slot,
                    token,
                    remaining,
                } => Some((slot.clone(), *token, *remaining)),
                ViewerEvent::Diagnostic(_) => None,
            })
            .collect()
    }

    #[test]
    fn reinit_leaves_one_loop_and_one_listener_set() {
        let mut registry = registry();
        for _ in 0..5 {
            assert!(registry.init("preview", "preview-canvas"));
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.host().pending_frames(), 1);
        assert_eq!(registry.host().attached_listeners(), 1);
        assert_eq!(registry.host().detach_calls(), 4);
    }

    #[test]
    fn destroy_twice_detaches_once() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        assert!(registry.destroy("preview"));
        assert!(!registry.destroy("preview"));
        assert_eq!(registry.host().detach_calls(), 1);
        assert_eq!(registry.host().pending_frames(), 0);
        assert!(registry.drain_events().is_empty());
    }

    #[test]
    fn missing_target_leaves_slot_empty() {
        let mut registry = registry();
        assert!(!registry.init("preview", "nope"));
        assert!(!registry.contains("preview"));
        assert_eq!(registry.host().pending_frames(), 0);
        assert_eq!(
            registry.drain_events(),
            vec![ViewerEvent::Diagnostic(Diagnostic::MissingTarget {
                slot: "preview".into(),
                container: "nope".into(),
            })]
        );
    }

    #[test]
    fn missing_target_still_destroys_previous_viewer() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        assert!(!registry.init("preview", "nope"));
        assert_eq!(registry.host().attached_listeners(), 0);
        assert_eq!(registry.host().pending_frames(), 0);
    }

    #[test]
    fn slots_are_independent() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        assert!(registry.init("solution", "solution-canvas"));
        assert_eq!(registry.host().pending_frames(), 2);

        let solved = FaceletState::solved().into();
        let _ = registry.update_state("solution", &solved);
        assert!(registry.instance("solution").unwrap().facelets().is_solved());
        assert!(!registry.instance("preview").unwrap().facelets().is_solved());

        assert!(registry.destroy("preview"));
        assert_eq!(registry.host().pending_frames(), 1);
        assert!(registry.contains("solution"));

        registry.destroy_all();
        assert!(registry.is_empty());
        assert_eq!(registry.host().pending_frames(), 0);
        assert_eq!(registry.host().attached_listeners(), 0);
    }

    #[test]
    fn update_state_twice_equals_once() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        let (moves, _) = parse_sequence("R U F'");
        let state = CubeState::from(FaceletState::solved().apply_moves(&moves));
        assert!(registry.update_state("preview", &state));
        let once = registry.instance("preview").unwrap().facelets();
        assert!(registry.update_state("preview", &state));
        assert_eq!(registry.instance("preview").unwrap().facelets(), once);
        assert_eq!(once, state.to_facelets());
    }

    #[test]
    fn json_update_reports_and_degrades() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        let json = r#"{
            "up": ["W","W","W","W","W","W","W","W","W"],
            "down": ["Y","Y","Y","Y","Y","Y","Y","Y","Y"],
            "front": ["R","R","R","R","R","R","R","R","X"],
            "back": ["O","O","O","O","O","O","O","O","O"],
            "left": ["G","G","G","G","G","G","G","G","G"]
        }"#;
        assert!(registry.update_state_json("preview", json));
        let events = registry.drain_events();
        assert!(events.contains(&ViewerEvent::Diagnostic(
            Diagnostic::MissingFace { face: FaceId::R }
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            ViewerEvent::Diagnostic(Diagnostic::MalformedFacelet {
                index: 8,
                ..
            })
        )));
        let facelets = registry.instance("preview").unwrap().facelets();
        assert_eq!(facelets.facelet(FaceId::F, 8), None);
        assert_eq!(facelets.facelet(FaceId::R, 4), None);
    }

    #[test]
    fn unreadable_json_keeps_previous_state() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        let solved = FaceletState::solved().into();
        let _ = registry.update_state("preview", &solved);
        assert!(!registry.update_state_json("preview", "{not json"));
        assert!(registry.instance("preview").unwrap().facelets().is_solved());
        assert!(matches!(
            registry.drain_events().as_slice(),
            [ViewerEvent::Diagnostic(Diagnostic::MalformedState { .. })]
        ));
    }

    #[test]
    fn unknown_slot_is_reported() {
        let mut registry = registry();
        assert!(!registry.update_state("ghost", &CubeState::default()));
        assert!(!registry.animate_move("ghost", "R"));
        assert_eq!(
            registry.drain_events(),
            vec![
                ViewerEvent::Diagnostic(Diagnostic::UnknownSlot {
                    slot: "ghost".into()
                }),
                ViewerEvent::Diagnostic(Diagnostic::UnknownSlot {
                    slot: "ghost".into()
                }),
            ]
        );
    }

    #[test]
    fn moves_complete_in_fifo_order() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        let solved = FaceletState::solved().into();
        let _ = registry.update_state("preview", &solved);
        assert!(registry.animate_move("preview", "R"));
        assert!(registry.animate_move("preview", "U'"));
        assert!(registry.animate_move("preview", "F2"));
        pump(&mut registry, 60);

        let done = completions(&registry.drain_events());
        let (expected, _) = parse_sequence("R U' F2");
        assert_eq!(
            done,
            vec![
                ("preview".to_owned(), expected[0], 2),
                ("preview".to_owned(), expected[1], 1),
                ("preview".to_owned(), expected[2], 0),
            ]
        );
        assert_eq!(
            registry.instance("preview").unwrap().facelets(),
            FaceletState::solved().apply_moves(&expected)
        );
    }

    #[test]
    fn unknown_tokens_are_skipped_and_queue_continues() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        assert_eq!(registry.animate_sequence("preview", "R Z3 U"), 2);
        assert!(!registry.animate_move("preview", "??"));
        pump(&mut registry, 40);

        let events = registry.drain_events();
        let skipped: Vec<_> = events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    ViewerEvent::Diagnostic(Diagnostic::UnknownMoveToken { .. })
                )
            })
            .collect();
        assert_eq!(skipped.len(), 2);
        let done: Vec<_> = completions(&events)
            .into_iter()
            .map(|(_, token, _)| token)
            .collect();
        assert_eq!(
            done,
            vec![
                MoveToken::new(FaceId::R, Turn::Clockwise),
                MoveToken::new(FaceId::U, Turn::Clockwise),
            ]
        );
    }

    #[test]
    fn destroy_mid_animation_reports_nothing_more() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        let _ = registry.animate_sequence("preview", "R U R' U'");
        pump(&mut registry, 3);
        assert!(registry.destroy("preview"));
        let _ = registry.drain_events();
        pump(&mut registry, 40);
        assert!(registry.drain_events().is_empty());
        assert_eq!(registry.host().pending_frames(), 0);
    }

    #[test]
    fn input_reaches_the_camera() {
        let mut registry = registry();
        assert!(registry.init("preview", "preview-canvas"));
        let before = registry.instance("preview").unwrap().camera_state();
        let _ = registry.handle_input(
            "preview",
            InputEvent::TouchStart {
                id: 3,
                x: 0.0,
                y: 0.0,
            },
        );
        assert!(registry.handle_input(
            "preview",
            InputEvent::TouchMove {
                id: 3,
                x: 0.0,
                y: 50.0
            }
        ));
        assert!(registry
            .handle_input("preview", InputEvent::Scroll { delta: -1.0 }));
        let after = registry.instance("preview").unwrap().camera_state();
        assert!((after.pitch - before.pitch - 0.5).abs() < 1e-5);
        assert!((after.zoom - before.zoom + 0.5).abs() < 1e-5);

        registry.reset_camera("preview");
        let reset = registry.instance("preview").unwrap().camera_state();
        assert_eq!(reset, before);
        assert!(!registry.handle_input(
            "preview",
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true
            }
        ));
    }
}
