pub mod build;
pub mod clean;
pub mod launch;

use crate::error::StepError;
use crate::exec::{CommandSpec, ProcessOutcome, Runner};
use std::time::Duration;

/// What to do when a step ends in anything other than success.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log it and carry on with the next step.
    #[default]
    Continue,
    /// Stop the sequence and report the step.
    Abort,
}

impl FailurePolicy {
    pub fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            Self::Abort
        } else {
            Self::Continue
        }
    }
}

/// Settings for the build path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Bounded-wait budget for each command.
    pub timeout: Duration,
    pub on_failure: FailurePolicy,
}

/// Runs commands in order, applying a [`FailurePolicy`] after each one.
pub(crate) struct Sequence<'a, R: Runner + ?Sized> {
    runner: &'a R,
    on_failure: FailurePolicy,
}

impl<'a, R: Runner + ?Sized> Sequence<'a, R> {
    pub(crate) fn new(runner: &'a R, on_failure: FailurePolicy) -> Self {
        Self { runner, on_failure }
    }

    pub(crate) fn step(
        &self,
        step: &'static str,
        spec: &CommandSpec,
    ) -> Result<ProcessOutcome, StepError> {
        let outcome = self.runner.run(spec);
        if outcome.is_success() {
            log::debug!("{step}: ok");
            return Ok(outcome);
        }
        match self.on_failure {
            FailurePolicy::Continue => {
                log::warn!("{step} step (`{}`) {outcome}; continuing", spec.program);
                Ok(outcome)
            }
            FailurePolicy::Abort => Err(StepError {
                step,
                program: spec.program.clone(),
                outcome,
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::exec::{CommandSpec, ProcessOutcome, Runner};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every spec and replays scripted outcomes (success once exhausted).
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) specs: RefCell<Vec<CommandSpec>>,
        outcomes: RefCell<VecDeque<ProcessOutcome>>,
    }

    impl Recorder {
        pub(crate) fn scripted(outcomes: impl IntoIterator<Item = ProcessOutcome>) -> Self {
            Self {
                specs: RefCell::default(),
                outcomes: RefCell::new(outcomes.into_iter().collect()),
            }
        }

        pub(crate) fn programs(&self) -> Vec<String> {
            self.specs.borrow().iter().map(|s| s.program.clone()).collect()
        }
    }

    impl Runner for Recorder {
        fn run(&self, spec: &CommandSpec) -> ProcessOutcome {
            self.specs.borrow_mut().push(spec.clone());
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(ProcessOutcome::Success)
        }
    }
}
