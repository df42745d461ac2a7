//! Tracing subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name attached to every span.
const SERVICE_NAME: &str = "Shelfscout";

/// File name of the active trace file inside the data directory.
const TRACE_FILE_NAME: &str = "shelfscout-otlp.json";

/// Default filter directive when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber, exporting spans under the plugin data
/// directory.
///
/// Does nothing if the data directory cannot be created; tracing is optional
/// and must never stop the plugin from loading. Only the first call in a
/// process takes effect.
pub fn init_tracing(config: &Config) {
    init_tracing_in(config, &crate::infrastructure::get_data_dir());
}

fn init_tracing_in(config: &Config, data_dir: &Path) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider =
        exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
