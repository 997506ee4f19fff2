use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: JSON events to stdout, filtered by
/// `RUST_LOG`. Later calls are no-ops, so tests can call it freely.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_tolerate_repeated_init() {
        init_tracing();
        init_tracing();
    }
}
