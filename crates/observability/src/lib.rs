//! Process-wide logging setup for admin panel hosts.

/// Tracing subscriber configuration.
pub mod tracing;

/// Initialize JSON logging with an `info` default filter.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init_with_default("info");
}
