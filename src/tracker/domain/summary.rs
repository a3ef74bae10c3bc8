//! Registry-wide aggregate counts.

use serde::{Deserialize, Serialize};

/// Derived counts over every project in a registry.
///
/// `pending_tasks + completed_tasks == total_tasks` for summaries produced
/// by the tracker. Values built by hand are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Number of registered projects.
    pub total_projects: usize,
    /// Number of tasks across all projects.
    pub total_tasks: usize,
    /// Number of completed tasks.
    pub completed_tasks: usize,
    /// Number of pending tasks.
    pub pending_tasks: usize,
}

impl ProjectSummary {
    /// Returns the completion rate as a whole percentage.
    ///
    /// Rounds half to even. Returns `None` when there are no tasks.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "percentage is computed in exact integer arithmetic"
    )]
    pub fn completion_percent(&self) -> Option<u64> {
        let total = u64::try_from(self.total_tasks).ok().filter(|t| *t > 0)?;
        let scaled = u64::try_from(self.completed_tasks).ok()?.checked_mul(100)?;
        let quotient = scaled / total;
        let doubled_remainder = (scaled % total) * 2;
        let round_up = doubled_remainder > total
            || (doubled_remainder == total && quotient % 2 == 1);
        Some(if round_up { quotient + 1 } else { quotient })
    }
}
