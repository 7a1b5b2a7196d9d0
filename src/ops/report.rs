//! Per-operation outcomes and their aggregate.
//!
//! Handlers return an [`OperationReport`]; the dispatcher collects them into
//! a [`RunReport`] whose overall success is the AND of every report.

/// Outcome of one requested operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    /// Short operation name, e.g. `install` or `github-install`.
    pub name: String,

    /// Whether every step of the operation succeeded.
    pub success: bool,

    /// One line per failed step.
    pub failures: Vec<String>,
}

impl OperationReport {
    /// Start a report that has not failed yet.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            failures: Vec::new(),
        }
    }

    /// Record a failed step. Success can only go from true to false.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.success = false;
        self.failures.push(reason.into());
    }

    /// Record a step outcome; `reason` is only evaluated on failure.
    pub fn check(&mut self, ok: bool, reason: impl FnOnce() -> String) -> bool {
        if !ok {
            self.fail(reason());
        }
        ok
    }
}

/// Outcomes of every operation in one invocation, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    operations: Vec<OperationReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: OperationReport) {
        self.operations.push(report);
    }

    pub fn operations(&self) -> &[OperationReport] {
        &self.operations
    }

    /// True when every operation succeeded (vacuously true when empty).
    pub fn success(&self) -> bool {
        self.operations.iter().all(|op| op.success)
    }

    /// Names of the operations that failed.
    pub fn failed(&self) -> Vec<&str> {
        self.operations
            .iter()
            .filter(|op| !op.success)
            .map(|op| op.name.as_str())
            .collect()
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }
}
