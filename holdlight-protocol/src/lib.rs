//! Phone-to-wall message protocol
//!
//! The phone app sends plain text over a BLE serial link. Two kinds of
//! frames share the same character stream and are tracked independently:
//!
//! ```text
//! config-frame  := '~' body '*'          e.g. "~D*"
//! problem-frame := '#' hold (',' hold)* '#'  e.g. "#S69,P82,E54#"
//! ```
//!
//! A config frame may immediately precede a problem frame, as in
//! `"~D*l#S69,S4,E54#"`. Characters outside any frame are ignored.
//!
//! There is no channel back to the sender: malformed or oversized frames
//! are dropped locally and the stream keeps flowing.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;

pub use frame::{
    FrameError, FrameEvent, FrameKind, MessageFramer, CONFIG_END, CONFIG_START, MAX_FRAME_LEN,
    PROBLEM_DELIMITER,
};
