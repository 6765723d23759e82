//! The fetch → extract → classify cycle.

use thiserror::Error;

use crate::data::{extract, Assessment, ParseError};
use crate::source::{FeedSource, FetchError};

/// Errors that abort a cycle. No partial assessment is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Run one cycle against `source`, returning a fresh assessment.
pub fn run_cycle(source: &mut dyn FeedSource) -> Result<Assessment, CycleError> {
    let result = fetch_and_assess(source);
    match &result {
        Ok(assessment) => tracing::info!(
            source = source.description(),
            readings = assessment.snapshot.len(),
            conditions = assessment.conditions.len(),
            "feed cycle complete"
        ),
        Err(e) => tracing::warn!(source = source.description(), error = %e, "feed cycle failed"),
    }
    result
}

fn fetch_and_assess(source: &mut dyn FeedSource) -> Result<Assessment, CycleError> {
    let bytes = source.fetch()?;
    let snapshot = extract(&bytes)?;
    Ok(Assessment::from_snapshot(snapshot))
}
