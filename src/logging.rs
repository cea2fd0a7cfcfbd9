//! Log output through `tracing`.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber on the current process.
///
/// `RUST_LOG` takes precedence over `default_directive` (for example
/// `"zcalc=debug"`). Fails if a global subscriber is already set.
pub fn init_logging(default_directive: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_fails() {
        // Another test may have installed a subscriber already; after this
        // call one is in place either way.
        let _ = init_logging("zcalc=debug");
        assert!(init_logging("zcalc=debug").is_err());
    }
}
