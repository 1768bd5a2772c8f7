use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Installs the global fmt subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .init();
        });
    }
}
