//! Shared test infrastructure for holdlight-core integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;

use holdlight_core::{BoardKind, BoardProfile, Controller, RelocationTable, WallConfig};
use holdlight_hal::{color, LedSurface, Rgb, Transport};

// ============================================================================
// Recording LED surface
// ============================================================================

/// One call made on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Set(usize, Rgb),
    Clear(Rgb),
    Show,
}

/// LED surface that records every call and keeps a copy of each flushed frame
pub struct RecordingSurface {
    pixels: Vec<Rgb>,
    ops: Vec<Op>,
    frames: Vec<Vec<Rgb>>,
}

impl RecordingSurface {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![color::OFF; len],
            ops: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Buffer contents, flushed or not
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn show_count(&self) -> usize {
        self.frames.len()
    }

    /// Last frame sent to the strip
    pub fn shown(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lit LEDs of the last flushed frame
    pub fn lit(&self) -> Vec<(usize, Rgb)> {
        self.shown()
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, pixel)| *pixel != color::OFF)
            .collect()
    }

    pub fn forget(&mut self) {
        self.ops.clear();
        self.frames.clear();
    }
}

impl LedSurface for RecordingSurface {
    type Error = ();

    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.ops.push(Op::Set(index, color));
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn clear(&mut self, color: Rgb) {
        self.ops.push(Op::Clear(color));
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
    }

    fn show(&mut self) -> Result<(), ()> {
        self.ops.push(Op::Show);
        self.frames.push(self.pixels.clone());
        Ok(())
    }
}

// ============================================================================
// Scripted transport
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDown;

/// Transport replaying a fixed byte script
pub struct ScriptedTransport {
    pub connected: bool,
    pub fail_reads: bool,
    rx: VecDeque<char>,
    pub advertised: Option<String>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            connected: false,
            fail_reads: false,
            rx: VecDeque::new(),
            advertised: None,
        }
    }

    pub fn push(&mut self, input: &str) {
        self.rx.extend(input.chars());
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Transport for ScriptedTransport {
    type Error = LinkDown;

    fn begin(&mut self, name: &str) -> Result<(), LinkDown> {
        self.advertised = Some(name.to_string());
        Ok(())
    }

    fn connected(&mut self) -> bool {
        self.connected
    }

    fn available(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read_char(&mut self) -> Result<char, LinkDown> {
        if self.fail_reads {
            return Err(LinkDown);
        }
        self.rx.pop_front().ok_or(LinkDown)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Standard board, one LED per hold
pub fn standard_controller() -> Controller<RecordingSurface> {
    Controller::from_config(&WallConfig::new(), RecordingSurface::new(198))
}

/// Standard board with relocation overrides
pub fn relocated_controller(pairs: &[(u16, u16)]) -> Controller<RecordingSurface> {
    let mut config = WallConfig::new();
    config.board = BoardProfile::new(BoardKind::Standard);
    config.relocations = RelocationTable::from_pairs(pairs).unwrap();
    Controller::from_config(&config, RecordingSurface::new(198))
}
