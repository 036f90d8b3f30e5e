//! Tracing/logging setup shared by anything embedding the order store.

/// Tracing configuration (filters, formatting).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
