//! Sync-bit embedding.
//!
//! Adjusts the current block's quantised codes so that the XOR of the
//! parity group's code LSBs, folded with the per-channel dither bits,
//! equals the sync-word bit due at the current phase. When the parity
//! already matches, no record is touched; otherwise the single quantiser
//! with the smallest distortion penalty in the group has its code
//! replaced by its alternate code, flipping exactly one LSB.
//!
//! Both variants assume the quantiser's guarantees: every `alt_code`
//! differs from its `code` only in the LSB, and dither bits are 0 or 1.
//! A violation silently embeds the wrong parity; it is a caller contract
//! breach, checked by debug assertions only, never detected at runtime.

use log::trace;

use crate::process::CouplingMode;
use crate::structs::band::{Band, PENALTY_SEARCH_ORDER};
use crate::structs::channel::ChannelState;
use crate::structs::sync::SyncPhase;

/// Which channel of the block holds the substitution candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Running minimum-penalty candidate over a parity group.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    side: Side,
    band: Band,
    penalty: u32,
}

impl Candidate {
    fn seed(ch: &ChannelState, side: Side, band: Band) -> Self {
        Self {
            side,
            band,
            penalty: ch.quantiser[band].dist_penalty,
        }
    }

    /// Examines `ch`'s quantisers in [`PENALTY_SEARCH_ORDER`], taking a
    /// new candidate only on a strictly smaller penalty so that the
    /// earliest-examined record wins ties. Comparing the seed against
    /// itself can never update the candidate.
    fn fold_channel(&mut self, ch: &ChannelState, side: Side) {
        for band in PENALTY_SEARCH_ORDER {
            let penalty = ch.quantiser[band].dist_penalty;
            if penalty < self.penalty {
                *self = Self { side, band, penalty };
            }
        }
    }
}

fn debug_check(ch: &ChannelState) {
    debug_assert!(ch.dither_sync_bit <= 1, "dither_sync_bit must be 0 or 1");

    for band in Band::ALL {
        let q = &ch.quantiser[band];
        debug_assert_eq!(
            q.code ^ q.alt_code,
            1,
            "alt_code must differ from code only in the LSB"
        );
    }
}

fn substitute(ch: &mut ChannelState, side: Side, band: Band) {
    let q = &mut ch.quantiser[band];
    trace!(
        "sync substitution on {side:?} {band:?}: code {} -> {}",
        q.code, q.alt_code
    );

    q.code = q.alt_code;
}

/// Embeds the due sync bit across both channels as one parity group.
///
/// The XOR of all 8 code LSBs and both dither bits is forced to equal
/// bit `phase` of the sync word; at most one code is replaced with its
/// alternate, chosen for minimal distortion penalty. The phase rotates
/// exactly once per call.
pub fn insert_sync_stereo(
    left: &mut ChannelState,
    right: &mut ChannelState,
    phase: &mut SyncPhase,
) {
    debug_check(left);
    debug_check(right);

    let parity = left.sync_parity() ^ right.sync_parity();

    // Seed the search on the right channel's LH quantiser, then sweep
    // the right channel followed by the left. The examination order is
    // part of the bitstream contract: strict-less-than updates mean ties
    // keep the earliest record seen.
    let mut candidate = Candidate::seed(right, Side::Right, Band::LH);
    candidate.fold_channel(right, Side::Right);
    candidate.fold_channel(left, Side::Left);

    if parity != phase.bit() {
        let ch = match candidate.side {
            Side::Left => left,
            Side::Right => right,
        };
        substitute(ch, candidate.side, candidate.band);
    }

    phase.rotate();
}

/// Embeds the due sync bit into each channel independently.
///
/// Both channels carry the same sync-word bit for the block, each with
/// its own parity group and minimum-penalty search confined to its own 4
/// quantisers. The phase rotates exactly once per call, after both
/// channels are processed.
pub fn insert_sync_dual_mono(
    left: &mut ChannelState,
    right: &mut ChannelState,
    phase: &mut SyncPhase,
) {
    let target = phase.bit();

    insert_sync_mono(left, Side::Left, target);
    insert_sync_mono(right, Side::Right, target);

    phase.rotate();
}

fn insert_sync_mono(ch: &mut ChannelState, side: Side, target: u32) {
    debug_check(ch);

    let parity = ch.sync_parity();

    let mut candidate = Candidate::seed(ch, side, Band::LH);
    candidate.fold_channel(ch, side);

    if parity != target {
        substitute(ch, side, candidate.band);
    }
}

/// Dispatches to the inserter variant matching the stream's coupling mode.
pub fn insert_sync(
    mode: CouplingMode,
    left: &mut ChannelState,
    right: &mut ChannelState,
    phase: &mut SyncPhase,
) {
    match mode {
        CouplingMode::Stereo => insert_sync_stereo(left, right, phase),
        CouplingMode::DualMono => insert_sync_dual_mono(left, right, phase),
    }
}
