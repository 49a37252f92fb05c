use strum_macros::Display as EnumToString;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, EnumToString, PartialEq, Eq)]
#[strum(serialize_all = "kebab_case")]
pub enum LogKey {
    CountrySearch,
    DatasetLoaded,
    DatasetRejected,
    FilterApplied,
    NameResolutionSkipped,
    SelectionResolved,
    TracingInitialized,
    UnknownRecord,
}

/// Creates a tracing subscriber and sets it as the global default.
pub fn init_tracing<Sink>(service_name: &str, log_level: &str, sink: Sink)
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // Filter out any events that are below `log_level`.
    let env_filter = EnvFilter::new(log_level);

    let format_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(false)
        .with_target(false)
        .with_writer(sink);

    let subscriber = Registry::default().with(env_filter).with(format_layer);

    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
    tracing::info!(
        r#type = LogKey::TracingInitialized.to_string().as_str(),
        service = service_name,
        "Tracing initialized"
    );
}

/// Every event carries a `type` field holding the kebab-cased `LogKey`.
#[macro_export]
macro_rules! debug {
    ($key:expr, $($arg:tt)+) => {
        ::tracing::debug!(r#type = $key.to_string().as_str(), $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($key:expr, $($arg:tt)+) => {
        ::tracing::info!(r#type = $key.to_string().as_str(), $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($key:expr, $($arg:tt)+) => {
        ::tracing::warn!(r#type = $key.to_string().as_str(), $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($key:expr, $($arg:tt)+) => {
        ::tracing::error!(r#type = $key.to_string().as_str(), $($arg)+)
    };
}
