//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker that performs the catalog load. It
//! also implements distributed tracing context propagation across the thread
//! boundary so worker spans link back to the triggering event.

use crate::domain::Product;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the product list from the catalog source.
    ///
    /// Sent exactly once, after plugin permissions are granted. There is no
    /// retry message: a failed load leaves the catalog empty until the plugin
    /// is reloaded.
    LoadCatalog {
        /// Optional override of the catalog document path (tilde-expandable).
        /// `None` uses the default data-dir location.
        path: Option<String>,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Create a `LoadCatalog` message with current trace context.
    #[must_use]
    pub fn load_catalog(path: Option<String>) -> Self {
        Self::LoadCatalog {
            path,
            trace_context: TraceContext::from_current(),
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog was fetched and parsed successfully.
    CatalogLoaded {
        /// The full product list, in source order.
        products: Vec<Product>,
    },

    /// The catalog could not be loaded.
    ///
    /// The handler reacts by clearing the store and showing a single
    /// user-visible notice; the failure is not retried.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
