//! Recording host used by the lifecycle tests.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use super::host::{FrameHandle, ListenerSet, RenderSurface, ViewerHost};
use crate::scene::SceneFrame;

struct CountingSurface {
    size: (u32, u32),
    draws: Rc<Cell<usize>>,
}

impl RenderSurface for CountingSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size = (width, height);
        }
    }

    fn draw(&mut self, frame: &SceneFrame) {
        assert_eq!(frame.cubies.len(), 27);
        self.draws.set(self.draws.get() + 1);
    }
}

/// Host that records every frame request and listener attachment.
pub(crate) struct RecordingHost {
    containers: FxHashSet<String>,
    next_id: u64,
    frames: BTreeSet<FrameHandle>,
    listeners: FxHashSet<u64>,
    detach_calls: usize,
    draws: Rc<Cell<usize>>,
}

impl RecordingHost {
    pub(crate) fn with_containers(containers: &[&str]) -> Self {
        Self {
            containers: containers.iter().map(|&c| c.to_owned()).collect(),
            next_id: 0,
            frames: BTreeSet::new(),
            listeners: FxHashSet::default(),
            detach_calls: 0,
            draws: Rc::new(Cell::new(0)),
        }
    }

    /// Frames requested and neither fired nor cancelled.
    pub(crate) fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Fire every pending frame: hand back the handles and forget them.
    pub(crate) fn take_pending(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.frames).into_iter().collect()
    }

    pub(crate) fn attached_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn detach_calls(&self) -> usize {
        self.detach_calls
    }

    pub(crate) fn draws(&self) -> usize {
        self.draws.get()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl ViewerHost for RecordingHost {
    fn resolve_surface(
        &mut self,
        container_id: &str,
    ) -> Option<Box<dyn RenderSurface>> {
        self.containers.contains(container_id).then(|| -> Box<dyn RenderSurface> {
            Box::new(CountingSurface {
                size: (640, 480),
                draws: Rc::clone(&self.draws),
            })
        })
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        let _ = self.frames.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.frames.remove(&handle);
    }

    fn attach_listeners(&mut self, container_id: &str) -> ListenerSet {
        let id = self.next_id();
        let _ = self.listeners.insert(id);
        ListenerSet {
            id,
            container: container_id.to_owned(),
        }
    }

    fn detach_listeners(&mut self, listeners: ListenerSet) {
        self.detach_calls += 1;
        assert!(
            self.listeners.remove(&listeners.id),
            "listener set {} detached twice",
            listeners.id
        );
    }
}
