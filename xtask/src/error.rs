use crate::exec::ProcessOutcome;
use thiserror::Error;

/// A sequence step that did not succeed while running with `--fail-fast`.
#[derive(Debug, Error)]
#[error("{step} step (`{program}`) {outcome}")]
pub struct StepError {
    pub step: &'static str,
    pub program: String,
    pub outcome: ProcessOutcome,
}
