//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → swipedeck-otlp.json
//! ```
//!
//! Spans are written to `~/.local/share/zellij/swipedeck/swipedeck-otlp.json`,
//! one OTLP batch per line, rotated at 10 MB with three backups. The level is
//! taken from the `trace_level` plugin option and defaults to `"info"`.
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: span exporter and OTLP JSON model
//! - [`rotation`]: size-rotated line file

mod exporter;
mod init;
mod rotation;

pub use init::init_tracing;
