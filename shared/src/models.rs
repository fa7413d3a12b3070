use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

// ═══════════════════════════════════════════════════════════════════════════
// PROJECT & TASK INPUTS
// ═══════════════════════════════════════════════════════════════════════════

/// Financial and schedule attributes of a project, as tracked by the owning
/// application. Consumed read-only by the EVM engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFinancials {
    pub id: Uuid,
    /// Total authorized cost (Budget At Completion input).
    pub budget: f64,
    /// Cumulative actual cost to date.
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    /// Planned finish. When absent, a synthetic deadline of
    /// `start_date + 30 days` is applied.
    pub deadline: Option<DateTime<Utc>>,
    /// Manually-asserted completion in [0, 100]. When set — including an
    /// explicit 0 — it overrides the task-derived completion rate.
    pub completion_percentage: Option<f64>,
}

impl ProjectFinancials {
    /// Boundary validation: reject malformed numbers before they reach the
    /// engine. Once inputs pass, every snapshot field is finite by
    /// construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("budget", self.budget), ("spent", self.spent)] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeAmount { field, value });
            }
        }
        if let Some(pct) = self.completion_percentage {
            if !pct.is_finite() {
                return Err(ValidationError::NonFinite {
                    field: "completion_percentage",
                });
            }
            if !(0.0..=100.0).contains(&pct) {
                return Err(ValidationError::CompletionOutOfRange(pct));
            }
        }
        Ok(())
    }
}

/// Workflow status of a task. Only `Done` counts as completed; any
/// unrecognized status string collapses to `Other` and is treated as
/// not-done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    Review,
    Done,
    #[serde(other)]
    Other,
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

/// Minimal task projection the engine consumes. Order is irrelevant; only
/// the done / not-done counts matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    pub status: TaskStatus,
}

// ═══════════════════════════════════════════════════════════════════════════
// EVM SNAPSHOT OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// One project's latest earned-value snapshot. Replaced wholesale on every
/// recompute; never merged or mutated field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvmSnapshot {
    pub project_id: Uuid,
    pub budget_at_completion: f64,
    pub planned_value: f64,
    pub earned_value: f64,
    pub actual_cost: f64,
    pub schedule_variance: f64,
    pub cost_variance: f64,
    pub schedule_performance_index: f64,
    pub cost_performance_index: f64,
    pub estimate_at_completion: f64,
    pub estimate_to_complete: f64,
    pub variance_at_completion: f64,
    pub last_updated: DateTime<Utc>,
}

// ═══════════════════════════════════════════════════════════════════════════
// API REQUEST TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Request to recompute a project's EVM snapshot. The project id comes from
/// the route path; the owning application supplies a consistent view of the
/// project's financials and its current task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeEvmRequest {
    pub budget: f64,
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub completion_percentage: Option<f64>,
    #[serde(default)]
    pub tasks: Vec<TaskSummary>,
}

impl RecomputeEvmRequest {
    /// Split the payload into the engine's two inputs, keyed by the
    /// authoritative project id from the route.
    pub fn into_inputs(self, id: Uuid) -> (ProjectFinancials, Vec<TaskSummary>) {
        (
            ProjectFinancials {
                id,
                budget: self.budget,
                spent: self.spent,
                start_date: self.start_date,
                deadline: self.deadline,
                completion_percentage: self.completion_percentage,
            },
            self.tasks,
        )
    }
}
