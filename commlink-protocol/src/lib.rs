//! Commlink I/O Snapshot Protocol
//!
//! This crate implements the UART-based telegram protocol that exchanges a
//! complete I/O snapshot between two link peers. The protocol is designed
//! for simplicity and for recovery from an unaligned or corrupted stream.
//!
//! # Protocol Overview
//!
//! Every telegram is one fixed 28-byte frame:
//! ```text
//! ┌───────┬────┬────────┬─────────┬─────────┬────────┬──────┬───────┬───────┬─────┐
//! │ START │ ID │ LENGTH │ ~LENGTH │ DIGITAL │ ANALOG │ FLAG │ AUX A │ AUX B │ END │
//! │ 1B    │ 1B │ 1B     │ 1B      │ 4B      │ 8B     │ 1B   │ 5B    │ 5B    │ 1B  │
//! └───────┴────┴────────┴─────────┴─────────┴────────┴──────┴───────┴───────┴─────┘
//! ```
//!
//! There is no payload checksum; a frame is accepted on the joint structural
//! test of the start marker, the length/complement pair, and the end marker.
//! The receive side ([`Synchronizer`]) scans for that pattern in a live byte
//! stream that may begin mid-frame, re-aligning until a frame lines up.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod link;
pub mod snapshot;

pub use frame::{decode, encode, is_frame_valid, FRAME_END, FRAME_SIZE, FRAME_START, LENGTH_TAG};
pub use link::{send, SnapshotHandler, Synchronizer, WINDOW_SIZE};
pub use snapshot::{Snapshot, ANALOG_CHANNELS, AUX_LEN, DIGITAL_PINS};
