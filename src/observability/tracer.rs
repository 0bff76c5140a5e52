//! File-exporting OpenTelemetry tracer provider.
//!
//! Implements a custom `SpanExporter` that serializes each finished span to
//! one JSON line in a rotating file instead of sending it over the network,
//! which the plugin sandbox does not allow.

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

/// Span exporter writing one JSON line per span.
struct FileSpanExporter {
    /// Rotating output file.
    writer: FileWriter,
    /// Service name stamped on every line.
    service: String,
    /// Shutdown flag (prevents export after shutdown).
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn new(file_path: PathBuf, service: String) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Serializes one span to its JSON line representation.
    fn span_json(&self, span: &SpanData) -> JsonValue {
        let attributes: serde_json::Map<String, JsonValue> = span
            .attributes
            .iter()
            .map(|kv| (kv.key.to_string(), Self::attribute_json(&kv.value)))
            .collect();

        let status = match &span.status {
            opentelemetry::trace::Status::Unset => JsonValue::Null,
            opentelemetry::trace::Status::Ok => JsonValue::String("ok".to_string()),
            opentelemetry::trace::Status::Error { description } => {
                JsonValue::String(format!("error: {description}"))
            }
        };

        serde_json::json!({
            "service": self.service,
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
                JsonValue::Null
            } else {
                JsonValue::String(format!("{:016x}", span.parent_span_id))
            },
            "name": span.name,
            "startTimeUnixNano": Self::unix_nanos(span.start_time),
            "endTimeUnixNano": Self::unix_nanos(span.end_time),
            "attributes": attributes,
            "status": status,
        })
    }

    fn attribute_json(value: &opentelemetry::Value) -> JsonValue {
        use opentelemetry::Value;

        match value {
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::I64(i) => serde_json::json!(i),
            Value::F64(f) => serde_json::json!(f),
            Value::String(s) => JsonValue::String(s.to_string()),
            Value::Array(_) => JsonValue::String(format!("{value:?}")),
        }
    }

    fn unix_nanos(time: SystemTime) -> String {
        time.duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
            .to_string()
    }
}

impl SpanExporter for FileSpanExporter {
    /// Writes each span of the batch as its own line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        for span in &batch {
            let line = self.span_json(span).to_string();
            if let Err(e) = self.writer.write_line(&line) {
                return Box::pin(std::future::ready(Err(TraceError::from(e.to_string()))));
            }
        }

        Box::pin(std::future::ready(Ok(())))
    }

    /// Sets the shutdown flag; the file handle closes on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider with file-based export.
///
/// Uses a simple (immediate, non-batched) export strategy: the plugin is
/// event-driven and short-lived per invocation, so batching buys nothing.
pub fn create_tracer_provider(
    file_path: PathBuf,
    service: &str,
    resource: Resource,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, service.to_string());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
