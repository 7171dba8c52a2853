//! Commlink Hardware Abstraction Layer
//!
//! This crate defines the transport traits that chip-specific HALs implement
//! to carry Commlink frames. The protocol crate is written entirely against
//! these traits, so the same link code runs over any byte-stream device.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  commlink-protocol (codec + link)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  commlink-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chip-specific serial driver            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`serial::SerialTx`], [`serial::SerialRx`] - halves of a serial device
//! - [`serial::SerialPort`] - combined bidirectional device

#![no_std]
#![deny(unsafe_code)]

pub mod serial;

// Re-export key traits at crate root for convenience
pub use serial::{SerialPort, SerialRx, SerialTx};
