//! Wall controller
//!
//! Owns the framer, the session and the LED surface, and routes every
//! complete frame to its handler. Everything runs synchronously on the
//! caller's thread: one call to [`Controller::poll`] drains the transport
//! and leaves the LEDs showing the latest problem.

use holdlight_hal::{LedSurface, Transport};
use holdlight_protocol::{FrameEvent, MessageFramer, MAX_FRAME_LEN};

use crate::config::WallConfig;
use crate::geometry::GeometryMapper;
use crate::handler::{self, config, problem, Session};
use crate::render::HoldRenderer;

/// Character stream in, LED frames out
pub struct Controller<L: LedSurface> {
    framer: MessageFramer<MAX_FRAME_LEN>,
    session: Session,
    renderer: HoldRenderer,
    surface: L,
    connected: bool,
}

impl<L: LedSurface> Controller<L> {
    /// Create a controller drawing on `surface`
    pub fn new(renderer: HoldRenderer, surface: L) -> Self {
        Self {
            framer: MessageFramer::new(),
            session: Session::new(),
            renderer,
            surface,
            connected: false,
        }
    }

    /// Create a controller from the wall configuration
    pub fn from_config(config: &WallConfig, surface: L) -> Self {
        let geometry = GeometryMapper::new(config.board, config.relocations.clone());
        if geometry.total_leds() as usize > surface.len() {
            warn!(
                "Strip has {} LEDs, board needs {}",
                surface.len(),
                geometry.total_leds()
            );
        }
        Self::new(HoldRenderer::new(geometry, config.palette()), surface)
    }

    /// Process one received character
    pub fn feed(&mut self, c: char) {
        let Self {
            framer,
            session,
            renderer,
            surface,
            ..
        } = self;

        framer.feed(c, |event| match event {
            FrameEvent::Config(frame) => {
                debug!("Config frame: {}", frame);
                config::handle(session, surface, frame);
            }
            FrameEvent::Problem(frame) => {
                debug!("Problem frame: {}", frame);
                problem::handle(session, renderer, surface, frame);
            }
            FrameEvent::Error(e) => {
                warn!("Frame dropped: {}", e);
            }
        });
    }

    /// Process every character of `input` in order
    pub fn feed_str(&mut self, input: &str) {
        for c in input.chars() {
            self.feed(c);
        }
    }

    /// Drain the transport
    ///
    /// Returns the number of characters processed. Nothing is read while
    /// no peer is connected.
    pub fn poll<T: Transport>(&mut self, transport: &mut T) -> Result<usize, T::Error> {
        let connected = transport.connected();
        if connected != self.connected {
            if connected {
                info!("Peer connected");
            } else {
                info!("Peer disconnected");
            }
            self.connected = connected;
        }

        if !connected {
            return Ok(0);
        }

        let mut count = 0;
        while transport.available() {
            let c = transport.read_char()?;
            self.feed(c);
            count += 1;
        }
        Ok(count)
    }

    /// Turn every LED off and flush
    pub fn clear(&mut self) {
        handler::clear_all(&mut self.surface);
    }

    /// Current session flags
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Check if a peer was connected at the last poll
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// LED surface
    pub fn surface(&self) -> &L {
        &self.surface
    }

    /// LED surface, mutably
    pub fn surface_mut(&mut self) -> &mut L {
        &mut self.surface
    }

    /// Geometry used for rendering
    pub fn geometry(&self) -> &GeometryMapper {
        self.renderer.geometry()
    }

    /// Give the surface back
    pub fn into_surface(self) -> L {
        self.surface
    }
}
