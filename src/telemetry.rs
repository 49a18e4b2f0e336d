//! Tracing setup.

/// Installs an env-filtered fmt subscriber unless one is already set.
///
/// Filtering follows `RUST_LOG` (e.g. `RUST_LOG=workplan=debug`).
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
