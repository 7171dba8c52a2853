//! Transport-facing link layer: frame transmit and receive-side stream
//! synchronization.
//!
//! The receive path has to assume the worst of the byte stream: it may
//! begin mid-frame, carry corrupted bytes, or contain marker look-alikes.
//! [`Synchronizer`] recovers frame boundaries by scanning a one-frame
//! window for the structural byte pattern, discarding a prefix and
//! refilling whenever a candidate proves incomplete.

use commlink_hal::{SerialRx, SerialTx};
use heapless::Vec;

use crate::frame::{self, FRAME_SIZE, FRAME_START};
use crate::snapshot::Snapshot;

/// Capacity of the receive window, one full frame
pub const WINDOW_SIZE: usize = FRAME_SIZE;

/// Receiver of decoded snapshots.
///
/// Called synchronously from within the scan, so implementations see the
/// snapshot before any further stream activity. Side effects (echoing
/// `aux_b` back over the link, latching pin states, ...) belong to the
/// implementor.
pub trait SnapshotHandler {
    /// Called once for every accepted frame
    fn on_receive(&mut self, snapshot: &Snapshot);
}

// Blanket implementation so plain closures work as handlers
impl<F: FnMut(&Snapshot)> SnapshotHandler for F {
    fn on_receive(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Refill requirement for the scan window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillState {
    /// Window contents are exhausted; pull a full window of fresh bytes
    NeedFull,
    /// A compacted remnant sits at the front; pull this many bytes at the tail
    NeedPartial(usize),
    /// Window is full and ready to scan
    Full,
}

/// Frame-boundary synchronizer over a serial byte stream.
///
/// One [`recv`](Self::recv) call blocks until a structurally valid frame
/// is accepted or the transport fails. Malformed input is never an error,
/// only latency: the scan consumes bytes until a frame lines up.
#[derive(Debug)]
pub struct Synchronizer {
    window: Vec<u8, WINDOW_SIZE>,
    cursor: usize,
    fill: FillState,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synchronizer {
    /// Create a synchronizer with an empty window
    pub fn new() -> Self {
        Self {
            window: Vec::new(),
            cursor: 0,
            fill: FillState::NeedFull,
        }
    }

    /// Drop all buffered stream state.
    ///
    /// The next [`recv`](Self::recv) starts from a fresh window. Useful
    /// after the transport has been reopened.
    pub fn reset(&mut self) {
        self.restart();
    }

    /// Block until one valid frame arrives, decode it, and hand the
    /// snapshot to `handler`.
    ///
    /// The handler runs before this returns, and the accepted snapshot is
    /// also returned. Transport errors propagate unchanged.
    pub fn recv<R, H>(&mut self, port: &mut R, handler: &mut H) -> Result<Snapshot, R::Error>
    where
        R: SerialRx,
        H: SnapshotHandler,
    {
        loop {
            self.refill(port)?;

            // Hunt for a start marker from the current trial offset.
            if self.window[self.cursor] != FRAME_START {
                if self.cursor < WINDOW_SIZE - 1 {
                    self.cursor += 1;
                } else {
                    self.restart();
                }
                continue;
            }

            // The length pair must sit inside the window to judge the
            // candidate at all.
            if self.cursor + 3 >= WINDOW_SIZE {
                self.compact();
                continue;
            }

            if (self.window[self.cursor + 2] ^ self.window[self.cursor + 3]) != 0xFF {
                // Marker look-alike; the true frame may begin further in.
                self.cursor += 1;
                continue;
            }

            // A candidate is only validated once it is aligned to the
            // window front; re-window and re-scan otherwise.
            if self.cursor != 0 {
                self.compact();
                continue;
            }

            let mut candidate = [0u8; FRAME_SIZE];
            candidate.copy_from_slice(&self.window);

            if frame::is_frame_valid(&candidate) {
                let snapshot = frame::decode(&candidate);
                handler.on_receive(&snapshot);
                self.restart();
                return Ok(snapshot);
            }

            // End marker missing: a false positive on the start byte.
            // Keep the window; the true frame start may be later inside it.
            self.cursor += 1;
        }
    }

    /// Pull bytes until the window is full.
    ///
    /// Short reads are transient: each read lowers the outstanding count
    /// until the tail is filled.
    fn refill<R: SerialRx>(&mut self, port: &mut R) -> Result<(), R::Error> {
        let mut outstanding = match self.fill {
            FillState::Full => return Ok(()),
            FillState::NeedFull => {
                self.window.clear();
                self.cursor = 0;
                WINDOW_SIZE
            }
            FillState::NeedPartial(count) => count,
        };

        let mut chunk = [0u8; WINDOW_SIZE];
        while outstanding > 0 {
            let got = port.read(&mut chunk[..outstanding])?;
            let _ = self.window.extend_from_slice(&chunk[..got]);
            outstanding -= got;
            self.fill = FillState::NeedPartial(outstanding);
        }

        self.fill = FillState::Full;
        Ok(())
    }

    /// Discard the scanned prefix, left-shifting `[cursor..)` to the front.
    ///
    /// Relative order is preserved; the next refill appends exactly the
    /// discarded count at the tail.
    fn compact(&mut self) {
        let discarded = self.cursor;
        self.window.copy_within(discarded.., 0);
        self.window.truncate(WINDOW_SIZE - discarded);
        self.fill = FillState::NeedPartial(discarded);
        self.cursor = 0;
    }

    /// Restart with a fresh window on the next refill
    fn restart(&mut self) {
        self.fill = FillState::NeedFull;
        self.cursor = 0;
    }
}

/// Encode `snapshot` and write the frame to the transmit half of a port.
///
/// Reads the live snapshot at call time, retries short writes until the
/// whole frame is out, then flushes.
pub fn send<W: SerialTx>(port: &mut W, snapshot: &Snapshot, protocol_id: u8) -> Result<(), W::Error> {
    let frame = frame::encode(snapshot, protocol_id);
    port.write_all(&frame)?;
    port.flush()
}
