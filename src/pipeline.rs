use thiserror::Error;

use crate::error::RetargetError;

/// A named step run against a shared mutable context.
pub struct Stage<C> {
    /// Stable stage identifier used in logs and errors.
    pub name: &'static str,
    /// Step body; returning `Err` stops the run.
    pub run: fn(&mut C) -> Result<(), RetargetError>,
}

impl<C> Stage<C> {
    pub const fn new(name: &'static str, run: fn(&mut C) -> Result<(), RetargetError>) -> Self {
        Self { name, run }
    }
}

#[derive(Debug, Error)]
/// Error returned by `run_stages` when a step fails.
#[error("stage '{stage}' failed: {source}")]
pub struct StageError {
    /// Name of the stage that returned the error.
    pub stage: &'static str,
    /// Underlying failure.
    #[source]
    pub source: RetargetError,
}

impl From<StageError> for RetargetError {
    fn from(error: StageError) -> Self {
        error.source
    }
}

/// Run `stages` in order, stopping at the first failure.
///
/// # Returns
///
/// Names of the stages that completed.
///
/// # Errors
///
/// Returns `StageError` carrying the failing stage name and its error. Stages
/// after the failing one are not run.
pub fn run_stages<C>(
    context: &mut C,
    stages: &[Stage<C>],
) -> Result<Vec<&'static str>, StageError> {
    let mut completed = Vec::with_capacity(stages.len());
    for stage in stages {
        crate::log_debug!("Stage '{}' started", stage.name);
        (stage.run)(context).map_err(|source| StageError {
            stage: stage.name,
            source,
        })?;
        crate::log_debug!("Stage '{}' completed", stage.name);
        completed.push(stage.name);
    }
    Ok(completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        visited: Vec<&'static str>,
    }

    fn first(counter: &mut Counter) -> Result<(), RetargetError> {
        counter.visited.push("first");
        Ok(())
    }

    fn failing(counter: &mut Counter) -> Result<(), RetargetError> {
        counter.visited.push("failing");
        Err(RetargetError::BakeFailure("no links".to_string()))
    }

    fn never(counter: &mut Counter) -> Result<(), RetargetError> {
        counter.visited.push("never");
        Ok(())
    }

    #[test]
    fn given_all_stages_succeed_when_running_then_names_are_returned_in_order() {
        let mut counter = Counter::default();
        let stages: [Stage<Counter>; 2] = [Stage::new("first", first), Stage::new("again", first)];

        let completed = run_stages(&mut counter, &stages).unwrap();

        assert_eq!(completed, vec!["first", "again"]);
        assert_eq!(counter.visited.len(), 2);
    }

    #[test]
    fn given_failing_stage_when_running_then_later_stages_are_skipped() {
        let mut counter = Counter::default();
        let stages: [Stage<Counter>; 3] = [
            Stage::new("first", first),
            Stage::new("bake", failing),
            Stage::new("cleanup", never),
        ];

        let error = run_stages(&mut counter, &stages).unwrap_err();

        assert_eq!(error.stage, "bake");
        assert!(matches!(error.source, RetargetError::BakeFailure(_)));
        assert_eq!(counter.visited, vec!["first", "failing"]);
    }
}
