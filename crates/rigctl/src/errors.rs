//! Exit codes for rigctl.

/// Exit code for success (report produced, bundle compatible)
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors (unreadable or invalid parts file)
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the report was produced but the bundle is
/// incompatible, so scripts can branch on the verdict
pub const EXIT_INCOMPATIBLE: i32 = 2;
