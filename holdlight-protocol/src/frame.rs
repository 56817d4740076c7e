//! Incremental framing of the phone-to-wall character stream
//!
//! Framing rules:
//! - Config: `'~'` opens the frame, `'*'` closes it only if it is open.
//!   Every character consumed while open is kept, delimiters included.
//! - Problem: the first `'#'` opens the frame, the next `'#'` closes it.
//!   Every character except `'#'` is kept while open.
//!
//! The two kinds never reset each other. Buffers are bounded; a frame that
//! outgrows its buffer is reported as [`FrameError::Overflow`] and the rest
//! of it, up to and including its closing delimiter, is swallowed.

use core::fmt;

use heapless::String;

/// Opens a config frame
pub const CONFIG_START: char = '~';

/// Closes an open config frame
pub const CONFIG_END: char = '*';

/// Opens and closes a problem frame
pub const PROBLEM_DELIMITER: char = '#';

/// Default per-frame buffer capacity in bytes
///
/// A full standard board problem (every one of the 198 holds) does not fit,
/// but real problems are well under 30 holds (~150 bytes).
pub const MAX_FRAME_LEN: usize = 256;

/// The two frame kinds sharing the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    /// `~...*` session directives
    Config,
    /// `#...#` hold list
    Problem,
}

/// Errors that can occur while framing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame exceeded the buffer capacity and was discarded
    Overflow(FrameKind),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Overflow(FrameKind::Config) => {
                write!(f, "config frame exceeded buffer capacity")
            }
            FrameError::Overflow(FrameKind::Problem) => {
                write!(f, "problem frame exceeded buffer capacity")
            }
        }
    }
}

/// Output of [`MessageFramer::feed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameEvent<'a> {
    /// Complete config frame, delimiters included (e.g. `"~D*"`)
    Config(&'a str),
    /// Complete problem frame without the `'#'` delimiters (e.g. `"S69,S4"`)
    Problem(&'a str),
    /// A frame was dropped
    Error(FrameError),
}

/// Per-kind framing state
#[derive(Debug, Clone, Default)]
struct Channel<const N: usize> {
    started: bool,
    /// Skipping the tail of an overflowed frame
    discarding: bool,
    buffer: String<N>,
}

impl<const N: usize> Channel<N> {
    const fn new() -> Self {
        Self {
            started: false,
            discarding: false,
            buffer: String::new(),
        }
    }

    fn reset(&mut self) {
        self.started = false;
        self.discarding = false;
        self.buffer.clear();
    }

    fn overflow(&mut self) {
        self.reset();
        self.discarding = true;
    }
}

/// State machine reconstructing config and problem frames
///
/// `N` is the capacity of each of the two frame buffers.
#[derive(Debug, Clone, Default)]
pub struct MessageFramer<const N: usize = MAX_FRAME_LEN> {
    config: Channel<N>,
    problem: Channel<N>,
}

impl<const N: usize> MessageFramer<N> {
    /// Create a new framer with both frame kinds closed
    pub fn new() -> Self {
        Self {
            config: Channel::new(),
            problem: Channel::new(),
        }
    }

    /// Drop any partial frame of both kinds
    pub fn reset(&mut self) {
        self.config.reset();
        self.problem.reset();
    }

    /// Check if no frame of either kind is open or being discarded
    pub fn is_idle(&self) -> bool {
        !self.config.started
            && !self.config.discarding
            && !self.problem.started
            && !self.problem.discarding
    }

    /// Check if the tail of an overflowed frame is being skipped
    pub fn is_discarding(&self, kind: FrameKind) -> bool {
        match kind {
            FrameKind::Config => self.config.discarding,
            FrameKind::Problem => self.problem.discarding,
        }
    }

    /// Check if a frame of the given kind is open
    pub fn is_open(&self, kind: FrameKind) -> bool {
        match kind {
            FrameKind::Config => self.config.started,
            FrameKind::Problem => self.problem.started,
        }
    }

    /// Number of bytes buffered for an open frame
    pub fn pending(&self, kind: FrameKind) -> usize {
        match kind {
            FrameKind::Config => self.config.buffer.len(),
            FrameKind::Problem => self.problem.buffer.len(),
        }
    }

    /// Feed a single character
    ///
    /// `on_event` is called for every frame completed or dropped by this
    /// character, before the corresponding buffer is cleared. Config is
    /// evaluated before problem for the same character.
    pub fn feed<F>(&mut self, c: char, mut on_event: F)
    where
        F: FnMut(FrameEvent<'_>),
    {
        self.feed_config(c, &mut on_event);
        self.feed_problem(c, &mut on_event);
    }

    /// Feed every character of `input` in order
    pub fn feed_str<F>(&mut self, input: &str, mut on_event: F)
    where
        F: FnMut(FrameEvent<'_>),
    {
        for c in input.chars() {
            self.feed(c, &mut on_event);
        }
    }

    fn feed_config<F>(&mut self, c: char, on_event: &mut F)
    where
        F: FnMut(FrameEvent<'_>),
    {
        if self.config.discarding {
            if c == CONFIG_END {
                self.config.discarding = false;
            }
            return;
        }

        if c == CONFIG_START {
            self.config.started = true;
        }

        if !self.config.started {
            return;
        }

        if self.config.buffer.push(c).is_err() {
            if c == CONFIG_END {
                self.config.reset();
            } else {
                self.config.overflow();
            }
            on_event(FrameEvent::Error(FrameError::Overflow(FrameKind::Config)));
            return;
        }

        if c == CONFIG_END {
            on_event(FrameEvent::Config(self.config.buffer.as_str()));
            self.config.reset();
        }
    }

    fn feed_problem<F>(&mut self, c: char, on_event: &mut F)
    where
        F: FnMut(FrameEvent<'_>),
    {
        if self.problem.discarding {
            if c == PROBLEM_DELIMITER {
                self.problem.discarding = false;
            }
            return;
        }

        if c == PROBLEM_DELIMITER {
            if self.problem.started {
                on_event(FrameEvent::Problem(self.problem.buffer.as_str()));
                self.problem.reset();
            } else {
                self.problem.started = true;
            }
            return;
        }

        if !self.problem.started {
            return;
        }

        if self.problem.buffer.push(c).is_err() {
            self.problem.overflow();
            on_event(FrameEvent::Error(FrameError::Overflow(FrameKind::Problem)));
        }
    }
}
