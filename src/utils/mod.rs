//! Shared utilities

pub mod logging;

/// Default number of rows per record batch and individuals per parallel chunk
pub const DEFAULT_BATCH_SIZE: usize = 16384;
