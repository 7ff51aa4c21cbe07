//! Test fixtures and constants.

/// Passphrase every test command unlocks with.
pub const PASSPHRASE: &str = "correct horse battery staple";

/// Config using the lowest accepted work factor.
pub const TEST_CONFIG: &str = "iterations = 100000\n";

/// Standard credentials used across multiple tests.
pub const STANDARD_CREDENTIALS: &[(&str, &str, &str)] = &[
    ("GitHub", "alice", "gh-p@ss-1"),
    ("mail", "alice@example.com", "hunter2"),
    ("Bank", "alice01", "s3cret!#"),
];
