//! LED strip drivers

pub mod frame;

pub use frame::StripFrame;
