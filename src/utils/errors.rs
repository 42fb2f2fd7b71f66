#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("Sync phase must be below 8. Read {0}")]
    PhaseOutOfRange(u32),
}

#[derive(thiserror::Error, Debug)]
pub enum DitherError {
    #[error("Dither seed must be non-zero after masking to 23 bits")]
    ZeroSeed,
}
