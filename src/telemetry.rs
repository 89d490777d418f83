//! Tracing setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` overrides the filter; otherwise `default_filter` applies.
/// `json` switches to one JSON object per line.
pub fn init(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Create a span for one recommendation call.
    pub fn recommendation(heuristic: &'static str, user_id: &str, team_id: &str) -> Span {
        debug_span!("recommend", heuristic, user = %user_id, team = %team_id)
    }
}
