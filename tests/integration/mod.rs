//! Integration Tests Module
//!
//! End-to-end tests for the sync pipeline: task fetching against a mock
//! tracker, webhook delivery with signing and retry, report formatting,
//! and the full pipeline run.

// Shared fixtures: mock HTTP servers and scripted providers
mod support;

// Task source fetch, coercion, and error mapping tests
mod task_source_test;

// Webhook delivery, signing, and retry tests
mod delivery_test;

// Report formatting scenario tests
mod formatter_test;
