// ============================================================================
// bwc-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING
//
// The CLI reports bwc-core errors as-is; main maps them to the exit code.

use bwc_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;
