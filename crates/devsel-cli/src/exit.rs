// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERIC_FAIL: i32 = 1;
/// Bad configuration file or environment override. Matches clap's usage-error code.
pub const EXIT_CONFIG: i32 = 2;
