//! Standalone visualization window backed by winit.
//!
//! The window hosts a single viewer slot through a [`ViewerRegistry`]; the
//! window itself plays the [`ViewerHost`] role.
//!
//! ```no_run
//! # use cubeview::{Viewer, FaceletState};
//! Viewer::builder()
//!     .with_state(FaceletState::solved().into())
//!     .with_moves("R U R' U'")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    cube::CubeState,
    engine::{
        FrameHandle, ListenerSet, RenderSurface, ViewerEvent, ViewerHost,
        ViewerRegistry,
    },
    error::CubeViewError,
    input::{InputEvent, MouseButton},
    options::{DisplayOptions, Options},
    renderer::GpuSurface,
};

/// Slot name of the window's only viewer.
const SLOT: &str = "preview";
/// Container id the window resolves to its own surface.
const CONTAINER: &str = "main";
/// How often the fps readout in the title bar is refreshed.
const TITLE_REFRESH: Duration = Duration::from_secs(1);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    state: CubeState,
    moves: String,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Cubeview", empty state, no
    /// moves, default options).
    fn new() -> Self {
        Self {
            state: CubeState::default(),
            moves: String::new(),
            options: None,
            title: "Cubeview".into(),
        }
    }

    /// Set the initial cube state.
    #[must_use]
    pub fn with_state(mut self, state: CubeState) -> Self {
        self.state = state;
        self
    }

    /// Queue a whitespace-separated move sequence to play after start-up.
    #[must_use]
    pub fn with_moves(mut self, moves: impl Into<String>) -> Self {
        self.moves = moves.into();
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            state: self.state,
            moves: self.moves,
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays one cube.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    state: CubeState,
    moves: String,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`CubeViewError::Viewer`] if the event loop cannot be created
    /// or the window cannot be opened.
    pub fn run(self) -> Result<(), CubeViewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| CubeViewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            registry: None,
            state: self.state,
            moves: self.moves,
            options: self.options,
            title: self.title,
            title_refreshed: Instant::now(),
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| CubeViewError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Window host ──────────────────────────────────────────────────────────

/// [`ViewerHost`] over a single winit window.
///
/// Frame callbacks map onto `request_redraw`; the next `RedrawRequested`
/// fires whichever handle is pending.
struct WindowHost {
    window: Arc<Window>,
    display: DisplayOptions,
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl WindowHost {
    fn new(window: Arc<Window>, display: DisplayOptions) -> Self {
        Self {
            window,
            display,
            next_id: 0,
            pending: None,
        }
    }

    fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl ViewerHost for WindowHost {
    fn resolve_surface(
        &mut self,
        container_id: &str,
    ) -> Option<Box<dyn RenderSurface>> {
        if container_id != CONTAINER {
            return None;
        }
        let size = self.window.inner_size();
        match pollster::block_on(GpuSurface::new(
            Arc::clone(&self.window),
            (size.width, size.height),
            self.display.clone(),
        )) {
            Ok(surface) => Some(Box::new(surface)),
            Err(e) => {
                log::error!("failed to create render surface: {e}");
                None
            }
        }
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.pending = Some(handle);
        self.window.request_redraw();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    // winit delivers input for the whole window, so listeners are a
    // bookkeeping token only.
    fn attach_listeners(&mut self, container_id: &str) -> ListenerSet {
        ListenerSet {
            id: self.next_id(),
            container: container_id.to_owned(),
        }
    }

    fn detach_listeners(&mut self, listeners: ListenerSet) {
        log::debug!("listeners {} detached", listeners.id);
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    registry: Option<ViewerRegistry<WindowHost>>,
    state: CubeState,
    moves: String,
    options: Options,
    title: String,
    title_refreshed: Instant,
    error: Option<CubeViewError>,
}

impl ViewerApp {
    /// Forward an input event to the viewer and wake the loop.
    fn input(&mut self, event: InputEvent) {
        let Some(registry) = &mut self.registry else {
            return;
        };
        if registry.handle_input(SLOT, event) {
            if let Some(w) = &self.window {
                w.request_redraw();
            }
        }
    }

    /// Show the smoothed frame rate in the title bar, at most once per
    /// [`TITLE_REFRESH`].
    fn refresh_title(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.title_refreshed);
        if elapsed < TITLE_REFRESH {
            return;
        }
        let (Some(window), Some(registry)) = (&self.window, &self.registry)
        else {
            return;
        };
        if let Some(viewer) = registry.instance(SLOT) {
            let title = format!("{} ({:.0} fps)", self.title, viewer.fps());
            window.set_title(&title);
            self.title_refreshed = now;
        }
    }

    fn log_events(registry: &mut ViewerRegistry<WindowHost>) {
        for event in registry.drain_events() {
            match event {
                ViewerEvent::MoveCompleted {
                    token, remaining, ..
                } => {
                    log::info!("move {token} done, {remaining} remaining");
                }
                // Already logged where it was raised.
                ViewerEvent::Diagnostic(_) => {}
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = monitor.as_ref().map_or_else(
            || Window::default_attributes().with_title(&self.title),
            |mon| {
                let mon_size = mon.size();
                let scale = mon.scale_factor();
                // Square-ish window: a cube has no preferred aspect.
                let side = (f64::from(mon_size.width.min(mon_size.height))
                    / scale
                    * 0.6) as u32;
                Window::default_attributes()
                    .with_title(&self.title)
                    .with_inner_size(winit::dpi::LogicalSize::new(side, side))
            },
        );
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.error = Some(CubeViewError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let host = WindowHost::new(
            Arc::clone(&window),
            self.options.display.clone(),
        );
        let mut registry = ViewerRegistry::new(host, self.options.clone());
        if !registry.init(SLOT, CONTAINER) {
            self.error = Some(CubeViewError::Viewer(
                "could not create a render surface for the window".into(),
            ));
            event_loop.exit();
            return;
        }
        let _ = registry.update_state(SLOT, &self.state);
        if !self.moves.trim().is_empty() {
            let queued = registry.animate_sequence(SLOT, &self.moves);
            log::info!("queued {queued} moves");
        }

        window.request_redraw();
        self.window = Some(window);
        self.registry = Some(registry);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            if let Some(registry) = &mut self.registry {
                registry.destroy_all();
            }
            event_loop.exit();
            return;
        }

        // Guard: both window and registry must be initialised.
        if self.window.is_none() || self.registry.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(registry) = &mut self.registry {
                    registry.resize(SLOT, size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if let Some(registry) = &mut self.registry {
                    if let Some(handle) = registry.host_mut().take_frame() {
                        registry.on_frame(handle, now);
                    }
                    Self::log_events(registry);
                }
                self.refresh_title(now);
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::Touch(touch) => {
                let (x, y) = (touch.location.x as f32, touch.location.y as f32);
                let id = touch.id;
                self.input(match touch.phase {
                    TouchPhase::Started => InputEvent::TouchStart { id, x, y },
                    TouchPhase::Moved => InputEvent::TouchMove { id, x, y },
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        InputEvent::TouchEnd { id }
                    }
                });
            }

            // winit reports wheel-away and spreading fingers as positive;
            // the viewer expects positive to zoom out.
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.input(InputEvent::Scroll {
                    delta: -scroll_delta,
                });
            }

            WindowEvent::PinchGesture { delta, .. } => {
                self.input(InputEvent::Pinch {
                    delta: -(delta as f32),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if event.physical_key == PhysicalKey::Code(KeyCode::KeyR) {
                    if let Some(registry) = &mut self.registry {
                        registry.reset_camera(SLOT);
                    }
                }
            }

            _ => (),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(registry) = &mut self.registry {
            registry.destroy_all();
            Self::log_events(registry);
        }
    }
}
