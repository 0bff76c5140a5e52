//! Worker logic for the asynchronous catalog load.
//!
//! The catalog document is read off the main thread so the UI never blocks on
//! I/O. This module holds the worker's message processing; the Zellij worker
//! trait binding lives in the plugin shim (`main.rs`) so this logic stays
//! runnable and testable on the host target.

use crate::infrastructure::paths;
use crate::storage::{CatalogSource, JsonCatalogSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};

/// Worker state for catalog loading.
///
/// The catalog source is initialized lazily on the first message, honoring an
/// optional path override carried by the message itself.
#[derive(Serialize, Deserialize, Default)]
pub struct VitrineWorker {
    /// Catalog source, initialized lazily on first use.
    #[serde(skip)]
    source: Option<Box<dyn CatalogSource>>,
}

impl VitrineWorker {
    /// Creates a worker with an explicit catalog source.
    ///
    /// Used by tests and by callers that resolve the source themselves.
    #[must_use]
    pub fn with_source(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Resolves the catalog source for a load request.
    ///
    /// An explicit path override wins (tilde-expanded for the sandbox);
    /// otherwise the default data-dir location is used. The resolved source is
    /// kept for the lifetime of the worker.
    fn source_for(&mut self, path_override: Option<&str>) -> &dyn CatalogSource {
        if self.source.is_none() {
            let path = match path_override {
                Some(raw) => paths::expand_tilde(raw).into(),
                None => paths::catalog_file(),
            };
            tracing::debug!(path = ?path, "initializing catalog source");
            self.source = Some(Box::new(JsonCatalogSource::new(path)));
        }

        self.source
            .as_deref()
            .expect("source was just initialized")
    }

    /// Handles the `LoadCatalog` message.
    fn handle_load_catalog(&mut self, path: Option<String>) -> WorkerResponse {
        match self.source_for(path.as_deref()).fetch() {
            Ok(products) => {
                tracing::debug!(product_count = products.len(), "catalog loaded");
                WorkerResponse::CatalogLoaded { products }
            }
            Err(e) => {
                tracing::debug!(error = %e, "catalog load failed");
                WorkerResponse::Error {
                    message: format!("load catalog: {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the serialized trace
    /// information so spans created in the worker link to their parents on
    /// the main thread. Returns a guard that must be held for the duration of
    /// the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let WorkerMessage::LoadCatalog { trace_context, .. } = message;
        let trace_context = trace_context.as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context =
            opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => self.handle_load_catalog(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result, VitrineError};
    use crate::domain::Product;

    struct FixedSource(Vec<Product>);

    impl CatalogSource for FixedSource {
        fn fetch(&self) -> Result<Vec<Product>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn fetch(&self) -> Result<Vec<Product>> {
            Err(VitrineError::Catalog("unreachable".to_string()))
        }
    }

    fn sample() -> Vec<Product> {
        vec![Product {
            id: 1,
            title: "Caixa".to_string(),
            description: String::new(),
            details: String::new(),
            category: None,
            images: vec![],
            tags: vec![],
            price: 10.0,
            currency: "BRL".to_string(),
            variants: vec![],
        }]
    }

    #[test]
    fn load_responds_with_products_in_order() {
        let mut worker = VitrineWorker::with_source(Box::new(FixedSource(sample())));
        let response = worker.handle_message(WorkerMessage::load_catalog(None));

        match response {
            WorkerResponse::CatalogLoaded { products } => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].id, 1);
            }
            WorkerResponse::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[test]
    fn failed_fetch_becomes_an_error_response() {
        let mut worker = VitrineWorker::with_source(Box::new(FailingSource));
        let response = worker.handle_message(WorkerMessage::load_catalog(None));
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }

    #[test]
    fn messages_round_trip_through_json() {
        let message = WorkerMessage::load_catalog(Some("~/catalogo.json".to_string()));
        let payload = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        let WorkerMessage::LoadCatalog { path, .. } = decoded;
        assert_eq!(path.as_deref(), Some("~/catalogo.json"));
    }
}
