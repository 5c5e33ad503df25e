// bwc-cli/src/config.rs
//
// Defines default configuration constants for the `bwc-scene` command line.

/// Concurrent copies when organizing scene folders.
pub const DEFAULT_COPY_WORKERS: u8 = 4;
