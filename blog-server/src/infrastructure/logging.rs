use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// In test mode records go to the libtest writer so they are captured per test.
pub fn init_logging(default_level: &str, testing: bool) -> Result<()> {
    let filter = build_filter(default_level);

    let builder = fmt().with_env_filter(filter).with_target(true).compact();
    let result = if testing {
        builder.with_test_writer().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("failed to init logging: {e}"))
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
