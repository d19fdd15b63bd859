//! Services
//!
//! Business logic for the sync pipeline. Each stage is its own service;
//! the pipeline controller wires them together for one run.

pub mod analyzer;
pub mod batch;
pub mod formatter;
pub mod pipeline;
pub mod task_source;
pub mod webhook;

pub use analyzer::TicketAnalyzer;
pub use batch::BatchAnalyzer;
pub use formatter::{format_report, sort_items};
pub use pipeline::SyncPipeline;
pub use task_source::{FetchedTasks, TaskSourceClient};
pub use webhook::{DeliveryRecord, WebhookDeliverer};
