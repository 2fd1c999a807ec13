//! A shared memory book: entries keyed by nickname, flipped through like a
//! real book.
//!
//! The crate is host-agnostic. A shell embeds [`book::Book`], translates its
//! input events into [`book::Intent`]s and executes the [`book::Effect`]s
//! each `reduce` call returns, typically against a [`store::EntryStore`]
//! implementation and a [`media::MediaService`] off the render thread.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

pub mod access;
pub mod book;
pub mod config;
pub mod entry;
pub mod gesture;
pub mod media;
pub mod pagination;
pub mod store;

pub type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const FALLBACK_FILTER: &str = "info";

fn fallback_filter() -> EnvFilter {
    EnvFilter::new(FALLBACK_FILTER)
}

/// Install the global tracing subscriber. Starts from `RUST_LOG` (or info)
/// and hands back a reload handle so the host can apply the level from its
/// config file once that is parsed.
pub fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter());
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    info!("Tracing ready; RUST_LOG or config.log_level picks the level");
    handle
}

/// Swap the live filter for the level the host's config names.
pub fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = match EnvFilter::builder().parse(level) {
        Ok(filter) => filter,
        Err(err) => {
            warn!(%level, "Unparseable log level, keeping {FALLBACK_FILTER}: {err}");
            fallback_filter()
        }
    };
    match handle.modify(|filter| *filter = parsed.clone()) {
        Ok(()) => info!(%level, "Log level switched"),
        Err(err) => warn!(%level, "Could not swap the log filter: {err}"),
    }
}
