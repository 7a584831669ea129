/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG`
/// - **Pretty formatting**: Human-readable output with timestamps and levels
///
/// The core emits events but never installs a subscriber itself; only the
/// binary (or a test harness) should call this, and only once.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Show info, warn, and error messages
/// - `RUST_LOG=debug` - Show debug and above
/// - `RUST_LOG=bookshop=debug` - Debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
