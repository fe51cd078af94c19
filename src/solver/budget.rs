//! Iteration budgets for the open-ended loops of the solvers and searches

use crate::SunError;
use std::convert::Infallible;

/// Accounting for iterative algorithms that carry no cap of their own
///
/// Every loop iteration calls [`Budget::spend`] once. An error aborts the
/// algorithm and is handed back to the caller unchanged.
pub trait Budget {
    type Error;

    fn spend(&mut self) -> Result<(), Self::Error>;
}

/// A budget that never runs out
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl Budget for Unbounded {
    type Error = Infallible;

    fn spend(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// A budget allowing an optional maximum number of iterations
#[derive(Debug, Clone, Copy)]
pub struct IterationLimit {
    limit: Option<u32>,
    spent: u32,
}

impl IterationLimit {
    /// Allow at most `limit` iterations
    pub fn new(limit: u32) -> Self {
        IterationLimit {
            limit: Some(limit),
            spent: 0,
        }
    }

    /// Count iterations without ever failing
    pub fn unlimited() -> Self {
        IterationLimit {
            limit: None,
            spent: 0,
        }
    }

    /// A budget from an optional limit, `None` meaning unlimited
    pub fn from_option(limit: Option<u32>) -> Self {
        IterationLimit { limit, spent: 0 }
    }

    /// Number of iterations charged so far
    pub fn spent(&self) -> u32 {
        self.spent
    }
}

impl Budget for IterationLimit {
    type Error = SunError;

    fn spend(&mut self) -> Result<(), SunError> {
        match self.limit {
            Some(limit) if self.spent >= limit => Err(SunError::NoConvergence { limit }),
            _ => {
                self.spent = self.spent.saturating_add(1);
                Ok(())
            }
        }
    }
}
