//! Transaction approval by ordered escalation.
//!
//! An [`EscalationPipeline`] holds approval handlers in chain order, each owning a
//! half-open amount band `[lower, upper)`. A request is approved by the first
//! handler whose band holds its amount; if none does the outcome is
//! [`ApprovalResult::Unhandled`] and the request goes to manual review.

pub mod approval_processor;
pub mod config;
pub mod csv_reader;
pub mod domain;
pub mod pipeline;
pub mod report;
pub mod review_queue;

pub use approval_processor::{ApprovalProcessor, BatchSummary, Decision};
pub use config::{load_bands, reference_bands, ConfigError, PipelineConfig};
pub use domain::{Amount, Priority, TransactionKind, TransactionRequest};
pub use pipeline::{
    validate_chain, ApprovalResult, ConfigurationError, EscalationPipeline, EvaluationTrace,
    Handler,
};
pub use review_queue::ReviewQueue;
