//! Tracing subscriber setup.
//!
//! Structured events are only wanted while debugging, so the subscriber is
//! installed when `HALLPASS_DEBUG` or `RUST_LOG` is set, mirroring the
//! message macros' debug mode. `RUST_LOG` takes the usual filter syntax;
//! with only `HALLPASS_DEBUG` set the crate logs at `debug`.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "hallpass=debug";

pub fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("tracing already initialized: {}", e);
    }
}
