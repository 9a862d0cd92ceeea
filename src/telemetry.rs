//! Tracing setup shared by the binary and the test suite.

use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::error::AppErrors as Error;

/// Compose a bunyan-formatted subscriber writing to `sink`.
///
/// `env_filter` is the fallback level; `RUST_LOG` takes precedence.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Sync + Send
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Register a subscriber as the global default and redirect `log` events
/// into it. Must only be called once.
///
/// # Errors
/// Will return an error if a logger or subscriber is already registered.
pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) -> Result<(), Error> {
    LogTracer::init()?;
    set_global_default(subscriber)?;

    Ok(())
}
