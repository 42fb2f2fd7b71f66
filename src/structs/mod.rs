//! Data structures representing sync-layer components.
//!
//! Contains the subband enumeration, quantiser output records, channel
//! encoder state, sync pattern constants and per-channel codewords used
//! throughout the embedding and recovery pipeline.

pub mod band;
pub mod channel;
pub mod codeword;
pub mod quantiser;
pub mod sync;
