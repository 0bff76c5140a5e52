//! Background worker for the asynchronous catalog load.
//!
//! This module implements the worker-side logic that reads the catalog
//! document without blocking the main plugin thread, using Zellij's worker
//! API for cross-thread communication. Includes distributed tracing support
//! for observability.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker state and message processing logic

pub mod handler;
pub mod messages;

pub use handler::VitrineWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
