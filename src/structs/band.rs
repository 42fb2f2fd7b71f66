//! Subband enumeration and traversal orders.
//!
//! The analysis filter bank splits each block into 4 subbands, ordered
//! low-to-high frequency. Two traversal orders matter to the sync layer:
//! the frequency order used when folding code LSBs into a parity value,
//! and the penalty-search order deciding which quantiser is examined
//! first when two records carry the same distortion penalty.

/// One frequency-decomposed component of an audio block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Lowest-frequency subband.
    LL,
    LH,
    HL,
    /// Highest-frequency subband.
    HH,
}

impl Band {
    /// Number of subbands per channel.
    pub const COUNT: usize = 4;

    /// All subbands in frequency order.
    pub const ALL: [Band; Band::COUNT] = [Band::LL, Band::LH, Band::HL, Band::HH];
}

/// Quantiser examination order for the minimum-penalty search.
///
/// The search replaces its candidate only on a strictly smaller penalty,
/// so ties resolve in favour of the earliest entry here. Changing this
/// order changes which code is substituted on tied penalties and
/// therefore the emitted bitstream.
pub const PENALTY_SEARCH_ORDER: [Band; Band::COUNT] =
    [Band::LH, Band::HL, Band::LL, Band::HH];
