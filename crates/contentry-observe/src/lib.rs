//! Observability utilities for Contentry.
//!
//! Tracing subscriber setup with optional OpenTelemetry export. Model
//! calls are instrumented with OTel GenAI semantic-convention span fields
//! (`gen_ai.operation.name`, `gen_ai.request.model`, ...) at the call
//! sites.

pub mod tracing_setup;
