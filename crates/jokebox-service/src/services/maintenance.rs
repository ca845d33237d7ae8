//! Periodic store maintenance
//!
//! Removes jokes nobody voted on and repairs tallies that drifted from the
//! vote rows.

use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Counts from one maintenance pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub reconciled: u64,
    pub purged: u64,
}

pub struct MaintenanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete every joke whose tally is all zero
    #[instrument(skip(self))]
    pub async fn purge_unvoted_jokes(&self) -> ServiceResult<u64> {
        let purged = self.ctx.joke_repo().delete_all_zero().await?;
        if purged > 0 {
            info!(purged, "Purged unvoted jokes");
        }
        Ok(purged)
    }

    /// Recompute tallies from vote rows, returning how many were corrected
    #[instrument(skip(self))]
    pub async fn reconcile_tallies(&self) -> ServiceResult<u64> {
        Ok(self.ctx.joke_repo().recompute_tallies().await?)
    }

    /// Reconcile first so a drifted tally cannot keep a dead joke alive
    pub async fn sweep(&self) -> ServiceResult<SweepReport> {
        let reconciled = self.reconcile_tallies().await?;
        let purged = self.purge_unvoted_jokes().await?;
        Ok(SweepReport { reconciled, purged })
    }
}
