// shared/src/evm.rs
//
// Earned Value Management engine: pure computation, no I/O, no shared state.
// Callers validate inputs first and inject "now" so tests can pin the clock.

use chrono::{DateTime, Duration, Utc};

use crate::models::{EvmSnapshot, ProjectFinancials, TaskSummary};

/// Synthetic schedule length applied when a project has no planned finish.
const DEFAULT_SCHEDULE_DAYS: i64 = 30;

// ─────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────

/// Compute a project's earned-value snapshot from its financials and current
/// task list.
///
/// Planned value follows a linear schedule model: value accrues at a constant
/// rate between `start_date` and the deadline, clamped to [0, BAC]. Earned
/// value uses the manually-asserted completion percentage when one is set
/// (an explicit 0 still wins), otherwise the done/total task ratio.
///
/// Never errors: the duration floor and the index guards keep every output
/// finite, including for empty task lists and zero-spend projects.
pub fn compute_evm(
    project: &ProjectFinancials,
    tasks: &[TaskSummary],
    now: DateTime<Utc>,
) -> EvmSnapshot {
    let bac = project.budget.max(0.0);

    // Planned value under the linear schedule model.
    let start = project.start_date;
    let end = project
        .deadline
        .unwrap_or(start + Duration::days(DEFAULT_SCHEDULE_DAYS));
    // Floor of one millisecond guards zero/negative spans.
    let total_ms = (end - start).num_milliseconds().max(1);
    let elapsed_ms = (now - start).num_milliseconds().max(0);
    // Past-deadline projects are capped at 100% elapsed, not extrapolated.
    let percent_time_elapsed = (elapsed_ms as f64 / total_ms as f64).min(1.0);
    let planned_value = bac * percent_time_elapsed;

    // Earned value from percent complete.
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.status.is_done()).count();
    let task_completion_rate = if total_tasks > 0 {
        completed_tasks as f64 / total_tasks as f64
    } else {
        0.0
    };
    let percent_complete = match project.completion_percentage {
        Some(pct) => pct / 100.0,
        None => task_completion_rate,
    };
    let earned_value = bac * percent_complete;

    let actual_cost = project.spent;

    // Variances: positive SV = ahead of schedule, positive CV = under budget.
    let schedule_variance = earned_value - planned_value;
    let cost_variance = earned_value - actual_cost;

    // Indices default to the neutral 1.0 before any value is planned/spent.
    let schedule_performance_index = if planned_value > 0.0 {
        earned_value / planned_value
    } else {
        1.0
    };
    let cost_performance_index = if actual_cost > 0.0 {
        earned_value / actual_cost
    } else {
        1.0
    };

    // Forecasts. CPI reaches 0 when money was spent with nothing earned; the
    // budget itself is the fallback estimate in that case.
    let estimate_at_completion = if cost_performance_index > 0.0 {
        bac / cost_performance_index
    } else {
        bac
    };
    let estimate_to_complete = estimate_at_completion - actual_cost;
    let variance_at_completion = bac - estimate_at_completion;

    EvmSnapshot {
        project_id: project.id,
        budget_at_completion: bac,
        planned_value,
        earned_value,
        actual_cost,
        schedule_variance,
        cost_variance,
        schedule_performance_index,
        cost_performance_index,
        estimate_at_completion,
        estimate_to_complete,
        variance_at_completion,
        last_updated: now,
    }
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
