//! Configuration for bounding the passing and culmination searches

use crate::solver::IterationLimit;
use crate::{Result, SunError};
use serde::{Deserialize, Serialize};

/// Limits applied by the `try_*` queries of [`Sun`](super::Sun)
///
/// One iteration is one coarse sample of the marching search or one
/// Newton refinement step. The default is unbounded, which matches the
/// plain queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum iterations per query; `None` for no limit
    pub max_iterations: Option<u32>,
}

impl SearchLimits {
    /// No limit
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// At most `max_iterations` iterations per query
    pub fn bounded(max_iterations: u32) -> Self {
        SearchLimits {
            max_iterations: Some(max_iterations),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == Some(0) {
            return Err(SunError::InvalidConfig("max_iterations must be > 0"));
        }
        Ok(())
    }

    /// A fresh budget for one query
    pub(crate) fn budget(&self) -> IterationLimit {
        IterationLimit::from_option(self.max_iterations)
    }
}
