//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in holdlight-hal:
//!
//! - LED frame buffers for DMA-driven WS2812 strips
//! - Transports (serial BLE modules over `embedded-hal`/`embedded-io`)
//! - The boot-time LED self test

#![no_std]
#![deny(unsafe_code)]

pub mod led;
pub mod self_test;
pub mod transport;
