//! Batch Analyzer
//!
//! Runs the ticket analyzer over all fetched items in fixed-size groups.
//! Within a group all analyzer calls run concurrently; groups run
//! sequentially, capping in-flight model calls at the group size.

use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::models::analysis::{Analysis, AnalyzedItem};
use crate::models::structure::ProjectStructure;
use crate::models::task::WorkItem;
use crate::services::analyzer::TicketAnalyzer;

/// Default simultaneous model calls per group.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Fans the analyzer out over a fetched batch with bounded concurrency.
pub struct BatchAnalyzer {
    analyzer: TicketAnalyzer,
    concurrency: usize,
    cancellation_token: CancellationToken,
}

impl BatchAnalyzer {
    /// Create a new batch analyzer. `concurrency` below 1 is treated as 1.
    pub fn new(analyzer: TicketAnalyzer, concurrency: usize) -> Self {
        Self {
            analyzer,
            concurrency: concurrency.max(1),
            cancellation_token: CancellationToken::new(),
        }
    }

    /// Attach an external cancellation token, checked between groups.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    /// Request cancellation. Takes effect at the next group boundary.
    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    /// Analyze every item, preserving input order.
    ///
    /// Output length always equals input length: the analyzer never
    /// fails, and a cancelled remainder receives fallback analyses
    /// instead of being dropped.
    pub async fn analyze_all(
        &self,
        items: &[WorkItem],
        structure: &ProjectStructure,
    ) -> Vec<AnalyzedItem> {
        if items.is_empty() {
            return Vec::new();
        }

        let total_groups = items.len().div_ceil(self.concurrency);
        let mut results = Vec::with_capacity(items.len());

        for (group_index, group) in items.chunks(self.concurrency).enumerate() {
            if self.cancellation_token.is_cancelled() {
                debug!(
                    group = group_index + 1,
                    remaining = items.len() - results.len(),
                    "batch analysis cancelled, substituting fallbacks"
                );
                results.extend(group.iter().map(|item| AnalyzedItem {
                    task: item.clone(),
                    analysis: Analysis::fallback(),
                }));
                continue;
            }

            debug!(
                group = group_index + 1,
                total = total_groups,
                size = group.len(),
                "analyzing group"
            );

            // join_all returns results in future order, which is the
            // group's original item order.
            let futures: Vec<_> = group
                .iter()
                .map(|item| self.analyzer.analyze(item, structure))
                .collect();
            results.extend(join_all(futures).await);
        }

        results
    }
}
