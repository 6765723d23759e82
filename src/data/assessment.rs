//! One cycle's snapshot together with its classified conditions.

use std::time::Instant;

use super::classify::{classify_metric, ConditionVerdict, Metric, Tier};
use super::snapshot::Snapshot;

/// A classified metric value.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub metric: Metric,
    pub value: f64,
    pub verdict: ConditionVerdict,
}

/// Complete result of one fetch cycle, ready for display.
///
/// Never mutated after construction; the next cycle builds a new one.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub snapshot: Snapshot,
    /// One entry per classifiable metric with a numeric value, in
    /// [`Metric::ALL`] order.
    pub conditions: Vec<Condition>,
    pub fetched_at: Instant,
}

impl Assessment {
    /// Classify every metric the snapshot carries a number for.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let conditions = Metric::ALL
            .into_iter()
            .filter_map(|metric| {
                let value = snapshot.numeric(metric.key())?;
                Some(Condition {
                    metric,
                    value,
                    verdict: classify_metric(metric, value),
                })
            })
            .collect();

        Self {
            snapshot,
            conditions,
            fetched_at: Instant::now(),
        }
    }

    pub fn condition(&self, metric: Metric) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.metric == metric)
    }

    /// The most severe known tier across all conditions.
    pub fn worst_tier(&self) -> Option<Tier> {
        self.conditions
            .iter()
            .map(|c| c.verdict.tier)
            .filter(|t| t.severity().is_some())
            .max_by_key(|t| t.severity())
    }
}
