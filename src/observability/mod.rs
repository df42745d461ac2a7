//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans are written to
//! `~/.local/share/zellij/shelfscout/shelfscout-otlp.json`, one OTLP document
//! per line. The file rotates at 10 MiB and three backups are kept.
//!
//! The filter comes from the `trace_level` plugin option and accepts any
//! `EnvFilter` directive (`debug`, `shelfscout=trace`, ...). It defaults to
//! `info`.
//!
//! - `init`: subscriber setup
//! - `exporter`: the file span exporter and tracer provider
//! - `otlp`: OTLP JSON encoding
//! - `rotation`: size-bounded file with numbered backups

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;
