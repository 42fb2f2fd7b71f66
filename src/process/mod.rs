use std::fmt::Display;

/// Sync-bit embedding into quantised codes.
///
/// Provides [`insert_sync_stereo`](embed::insert_sync_stereo) and
/// [`insert_sync_dual_mono`](embed::insert_sync_dual_mono) for adjusting
/// one block's parity group(s) to carry the due sync-word bit.
pub mod embed;

/// Sync recovery from observed parity bits.
///
/// Provides [`sync_bit_stereo`](extract::sync_bit_stereo) /
/// [`sync_bit_mono`](extract::sync_bit_mono) for recomputing a block's
/// parity and the [`SyncDetector`](extract::SyncDetector) for regaining
/// block alignment.
pub mod extract;

/// Channel-coupling mode of the encoded stream.
///
/// Selected once per stream. The embedding variant must match it on every
/// block; switching modes mid-stream desynchronises the phase semantics
/// between encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouplingMode {
    /// Both channels form one parity group carrying one sync bit per block.
    Stereo,
    /// Each channel independently carries the same sync bit per block.
    DualMono,
}

impl Display for CouplingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CouplingMode::Stereo => write!(f, "Joint stereo"),
            CouplingMode::DualMono => write!(f, "Dual mono"),
        }
    }
}
