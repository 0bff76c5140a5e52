//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the plugin: spans emitted
//! through the `tracing` macros flow into the OpenTelemetry SDK and are
//! written as JSON lines to a rotating file for offline analysis; the plugin
//! sandbox has no network export path.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` plugin option (default
//! `"info"`). Traces land in `<data dir>/vitrine-otlp.json`, rotated at a
//! fixed size with one backup.
//!
//! # Modules
//!
//! - [`init`]: tracing initialization and subscriber setup
//! - `tracer`: file-exporting tracer provider
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod tracer;

pub use init::init_tracing;
