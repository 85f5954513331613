/// Per-object result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Summarized { object: String, destination: String },
    Failed { object: String, error: String },
}

/// Collected outcomes of one batch run. No state is persisted across
/// runs; a re-run reprocesses every matching source object.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<ProcessingOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: ProcessingOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ProcessingOutcome] {
        &self.outcomes
    }

    pub fn summarized(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ProcessingOutcome::Summarized { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ProcessingOutcome::Failed { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
