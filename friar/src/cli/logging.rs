use std::io;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_filter`; logs are
/// written to stderr so they never interleave with program output.
pub fn init_tracing(default_filter: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  let subscriber = tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr).with_target(true))
    .with(filter);

  // Only the first installation wins.
  let _ = subscriber.try_init();
}
