//! `tracing` subscriber for the command-line driver.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Environment variables read for the filter, in priority order.
const LOG_VARS: [&str; 2] = ["DHBA_LOG", "RUST_LOG"];

/// Install a hierarchical stderr subscriber if `DHBA_LOG` or `RUST_LOG` is
/// set. Does nothing otherwise, and nothing on repeated calls.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = filter_directives(|var| std::env::var(var).ok()) else {
            return;
        };

        let filter = match EnvFilter::try_new(&directives) {
            Ok(filter) => filter,
            Err(err) => {
                eprintln!("warning: ignoring invalid log filter '{directives}': {err}");
                return;
            }
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_indent_lines(true)
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}

/// First non-empty value among [`LOG_VARS`].
fn filter_directives(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOG_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests;
