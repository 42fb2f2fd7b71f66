//! Sync recovery from observed parity bits.
//!
//! A decoder regains block alignment by recomputing each block's parity
//! group and matching the resulting bit sequence against rotations of
//! the sync word. [`SyncDetector`] does the matching: it collects the
//! most recent [`SYNC_WORD_BITS`] observations, locks when the window
//! equals the expected observation for some phase, then predicts every
//! following block's bit, dropping the lock on the first mismatch.

use log::debug;

use crate::structs::channel::ChannelState;
use crate::structs::sync::{SYNC_WORD, SYNC_WORD_BITS, SyncPhase};

/// Recomputes the joint-stereo parity group bit for one block.
///
/// Read-only counterpart of the stereo inserter: the XOR of all 8 code
/// LSBs and both channels' dither bits.
#[inline(always)]
pub fn sync_bit_stereo(left: &ChannelState, right: &ChannelState) -> u32 {
    left.sync_parity() ^ right.sync_parity()
}

/// Recomputes one channel's dual-mono parity group bit.
#[inline(always)]
pub fn sync_bit_mono(ch: &ChannelState) -> u32 {
    ch.sync_parity()
}

/// Expected observation window when the newest block carried `phase`.
///
/// Bit `j` of the window is the sync bit of the block `j` positions
/// before the newest one, which was embedded at phase `(phase + j) mod 8`.
fn expected_window(phase: u32) -> u32 {
    (0..SYNC_WORD_BITS).fold(0, |window, j| {
        window | (((SYNC_WORD >> ((phase + j) % SYNC_WORD_BITS)) & 1) << j)
    })
}

/// Tracks sync lock over a stream of observed per-block sync bits.
///
/// Feed one bit per block with [`push_bit`](SyncDetector::push_bit);
/// joint-stereo streams produce one bit per block, dual-mono streams one
/// per channel (either channel serves, both carry the same bit).
///
/// Lock is unambiguous only while the 8 rotations of [`SYNC_WORD`] form
/// distinct windows, which holds for the current pattern.
///
/// # Example
///
/// ```rust
/// use autosync::process::extract::SyncDetector;
///
/// let mut detector = SyncDetector::default();
///
/// // A stream embedding sync word 0x01 from phase 0 emits 1,0,0,0,...
/// let mut phase = None;
/// for bit in [1, 0, 0, 0, 0, 0, 0, 0] {
///     phase = detector.push_bit(bit);
/// }
///
/// // Locked: the eight observed blocks walked the phase from 0 down to
/// // 1, so the next block carries bit 0 of the sync word again.
/// assert_eq!(phase.unwrap().index(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncDetector {
    window: u32,
    bits_seen: u32,
    expected: Option<SyncPhase>,
}

impl SyncDetector {
    /// Feeds the sync bit observed for the next block.
    ///
    /// Returns the phase the *following* block will carry, or `None`
    /// while unlocked. Losing lock discards the window; re-acquisition
    /// needs [`SYNC_WORD_BITS`] fresh observations.
    pub fn push_bit(&mut self, bit: u32) -> Option<SyncPhase> {
        debug_assert!(bit <= 1, "sync bit must be 0 or 1");

        self.window = ((self.window << 1) | bit) & ((1 << SYNC_WORD_BITS) - 1);
        self.bits_seen = (self.bits_seen + 1).min(SYNC_WORD_BITS);

        if let Some(mut phase) = self.expected {
            if bit == phase.bit() {
                phase.rotate();
                self.expected = Some(phase);

                return self.expected;
            }

            debug!("sync lock lost at phase {}", phase.index());
            self.expected = None;
            self.bits_seen = 0;

            return None;
        }

        if self.bits_seen >= SYNC_WORD_BITS {
            for index in 0..SYNC_WORD_BITS {
                if self.window == expected_window(index) {
                    let mut phase = SyncPhase::from_index(index);
                    debug!("sync lock acquired; newest block at phase {index}");

                    phase.rotate();
                    self.expected = Some(phase);

                    return self.expected;
                }
            }
        }

        None
    }

    /// Whether the detector currently holds sync lock.
    pub fn locked(&self) -> bool {
        self.expected.is_some()
    }

    /// The phase predicted for the next block, once locked.
    pub fn next_phase(&self) -> Option<SyncPhase> {
        self.expected
    }
}
