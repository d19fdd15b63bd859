//! Sprint Pilot - Sync Pipeline Library
//!
//! Syncs tickets from a list-based tracker through per-ticket LLM
//! analysis into a prioritized sprint report, delivered to a
//! caller-supplied webhook. It includes:
//! - The pipeline services (fetch, analyze, format, deliver)
//! - Data models and wire types
//! - Configuration storage
//! - Error taxonomy and path utilities

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::analysis::{Analysis, AnalyzedItem, Complexity};
pub use models::settings::{SettingsUpdate, SyncConfig};
pub use models::structure::{ProjectStructure, Route};
pub use models::sync::{DeliveryPayload, SyncMetadata, SyncRequest, SyncRunResult};
pub use models::task::{Priority, TaskStatus, WorkItem};
pub use services::{
    BatchAnalyzer, SyncPipeline, TaskSourceClient, TicketAnalyzer, WebhookDeliverer,
};
pub use storage::ConfigService;
pub use utils::error::{SyncError, SyncResult};
