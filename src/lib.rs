#![doc = include_str!("../README.md")]
//!
//! ## Technical Overview
//!
//! One bit of the repeating 8-bit sync word is buried per encoded block by
//! constraining the XOR parity of the block's quantised code LSBs. The
//! substitution policy is minimum-distortion: when the parity has to be
//! flipped, the quantiser with the smallest distortion penalty in the
//! parity group swaps its optimal code for its alternate code, which by
//! the quantiser's contract differs only in the least-significant bit.
//!
//! ### Parity Groups
//!
//! **Joint stereo**: the 8 codes of a block (4 subbands × 2 channels) form
//! one group carrying one sync bit.
//! **Dual mono**: each channel's 4 codes form an independent group; both
//! carry the same sync-word bit for the block.
//!
//! ### Phase
//!
//! The caller owns a [`SyncPhase`](structs::sync::SyncPhase) counter for
//! the lifetime of a stream. Every embedded block rotates it one step
//! backwards through the sync word, so after `N` blocks from phase `p0`
//! the counter reads `(p0 - N) mod 8`. A decoder tracking the same
//! rotation recovers block alignment from the observed bit sequence.
//!
//! ## Steps
//!
//! 1. Embed the due sync bit with [`process::embed::insert_sync_stereo`]
//!    or [`process::embed::insert_sync_dual_mono`], matching the stream's
//!    [`CouplingMode`](process::CouplingMode).
//! 2. Serialise the adjusted codes with [`structs::codeword::Codeword`].
//! 3. On the decoder side, recompute each block's parity with
//!    [`process::extract::sync_bit_stereo`] (or the mono variant) and feed
//!    it to a [`process::extract::SyncDetector`] to acquire and hold lock.

/// Processing functionality for the sync layer.
///
/// 1. **Embedding** ([`process::embed`]): adjusts one block's quantised
///    codes so their LSB parity carries the due sync-word bit.
///
/// 2. **Recovery** ([`process::extract`]): recomputes parity groups and
///    regains block alignment from the observed bit sequence.
pub mod process;

/// Data structures representing sync-layer components.
///
/// - **Subbands** ([`structs::band`]): band enumeration and traversal orders
/// - **Quantiser records** ([`structs::quantiser`]): codes, alternates, penalties
/// - **Channel state** ([`structs::channel`]): per-channel records and dither bit
/// - **Sync pattern** ([`structs::sync`]): sync word and phase counter
/// - **Codewords** ([`structs::codeword`]): per-channel serialised codes
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Dither bits** ([`utils::dither`]): deterministic per-channel bit source
/// - **Error Handling** ([`utils::errors`]): error types
pub mod utils;
