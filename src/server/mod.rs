//! HTTP server assembly and the paged route wrapper

pub mod builder;
pub mod paging;

pub use builder::ServerBuilder;
pub use paging::{paged_get, paged_get_with};

/// Initialize structured logging from the `RUST_LOG` environment
/// variable, defaulting to `info` for this crate.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cellar=info"));

    fmt().with_env_filter(filter).init();
}
