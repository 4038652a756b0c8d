use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `-v` selects debug, `-vv` trace, and no
/// flag falls back to the configured level.
pub fn init(verbosity: u8, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level_for(verbosity, configured_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    // A subscriber may already be set (tests); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn level_for(verbosity: u8, configured_level: &str) -> &str {
    match verbosity {
        0 => configured_level,
        1 => "debug",
        _ => "trace",
    }
}
