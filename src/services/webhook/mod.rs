//! Webhook Delivery
//!
//! Signed, retried delivery of the sprint report to the caller-supplied
//! destination.

pub mod deliverer;
pub mod signature;
pub mod types;

pub use deliverer::WebhookDeliverer;
pub use types::DeliveryRecord;
