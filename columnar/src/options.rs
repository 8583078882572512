use serde::{Deserialize, Serialize};

/// What the record builder does when a single field cannot be filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Leave the field at its default and keep going.
    #[default]
    BestEffort,
    /// Return the first failure for the whole batch.
    FailFast,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub policy: DecodePolicy,
    /// Treat a bound column that is missing from the batch as a failure
    /// instead of leaving the field at its default.
    pub require_columns: bool,
}

impl DecodeOptions {
    pub fn best_effort() -> Self {
        Self::default()
    }

    pub fn fail_fast() -> Self {
        Self {
            policy: DecodePolicy::FailFast,
            ..Self::default()
        }
    }

    pub fn require_columns(mut self, require: bool) -> Self {
        self.require_columns = require;
        self
    }

    pub(crate) fn is_fail_fast(&self) -> bool {
        self.policy == DecodePolicy::FailFast
    }
}
