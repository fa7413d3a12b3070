use chrono::{DateTime, Duration, TimeZone, Utc};
use shared::evm::compute_evm;
use shared::models::{ProjectFinancials, TaskStatus, TaskSummary};
use uuid::Uuid;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn project(
    budget: f64,
    spent: f64,
    deadline: Option<DateTime<Utc>>,
    completion: Option<f64>,
) -> ProjectFinancials {
    ProjectFinancials {
        id: Uuid::new_v4(),
        budget,
        spent,
        start_date: t0(),
        deadline,
        completion_percentage: completion,
    }
}

fn done_tasks(n: usize) -> Vec<TaskSummary> {
    (0..n).map(|_| TaskSummary { status: TaskStatus::Done }).collect()
}

#[test]
fn zero_spend_projects_have_neutral_cpi() {
    for completion in [None, Some(0.0), Some(40.0), Some(100.0)] {
        let p = project(3000.0, 0.0, None, completion);
        let snap = compute_evm(&p, &done_tasks(3), t0() + Duration::days(10));
        assert_eq!(snap.cost_performance_index, 1.0);
    }
}

#[test]
fn not_started_projects_are_schedule_neutral() {
    let p = project(3000.0, 100.0, Some(t0() + Duration::days(60)), Some(10.0));
    let snap = compute_evm(&p, &[], t0());
    assert_eq!(snap.planned_value, 0.0);
    assert_eq!(snap.schedule_performance_index, 1.0);

    let snap = compute_evm(&p, &[], t0() - Duration::days(7));
    assert_eq!(snap.planned_value, 0.0);
    assert_eq!(snap.schedule_performance_index, 1.0);
}

#[test]
fn explicit_zero_completion_wins_over_done_tasks() {
    let p = project(3000.0, 0.0, None, Some(0.0));
    let snap = compute_evm(&p, &done_tasks(2), t0() + Duration::days(5));
    assert_eq!(snap.earned_value, 0.0);
}

#[test]
fn overdue_projects_cap_pv_at_bac() {
    let p = project(3000.0, 0.0, Some(t0() + Duration::days(10)), None);
    for days_late in [1, 30, 365] {
        let snap = compute_evm(&p, &[], t0() + Duration::days(10 + days_late));
        assert_eq!(snap.planned_value, 3000.0);
    }
}

#[test]
fn forecasts_stay_consistent_with_budget() {
    // EAC * CPI == BAC whenever CPI > 0.
    let cases = [
        project(5000.0, 1200.0, Some(t0() + Duration::days(100)), Some(45.0)),
        project(800.0, 790.0, None, Some(12.5)),
        project(12_000.0, 0.0, Some(t0() + Duration::days(7)), None),
        project(640.0, 100.0, None, None),
    ];
    for p in &cases {
        let snap = compute_evm(p, &done_tasks(1), t0() + Duration::days(4));
        if snap.cost_performance_index > 0.0 {
            let recovered = snap.estimate_at_completion * snap.cost_performance_index;
            assert!(
                (recovered - snap.budget_at_completion).abs() < 1e-6,
                "EAC * CPI = {recovered}, expected {}",
                snap.budget_at_completion
            );
        }
    }
}

#[test]
fn end_to_end_reference_example() {
    let p = project(
        5000.0,
        1200.0,
        Some(t0() + Duration::days(100)),
        Some(45.0),
    );
    let snap = compute_evm(&p, &[], t0() + Duration::days(45));

    assert_eq!(snap.budget_at_completion, 5000.0);
    assert!((snap.planned_value - 2250.0).abs() < 1e-9);
    assert!((snap.earned_value - 2250.0).abs() < 1e-9);
    assert_eq!(snap.actual_cost, 1200.0);
    assert!(snap.schedule_variance.abs() < 1e-9);
    assert!((snap.cost_variance - 1050.0).abs() < 1e-9);
    assert!((snap.schedule_performance_index - 1.0).abs() < 1e-9);
    assert!((snap.cost_performance_index - 1.875).abs() < 1e-9);
    assert!((snap.estimate_at_completion - 2666.67).abs() < 0.01);
    assert!((snap.estimate_to_complete - 1466.67).abs() < 0.01);
    assert!((snap.variance_at_completion - 2333.33).abs() < 0.01);
}

#[test]
fn empty_project_produces_a_well_formed_snapshot() {
    let p = project(2000.0, 0.0, None, None);
    let snap = compute_evm(&p, &[], t0() + Duration::days(3));

    assert_eq!(snap.earned_value, 0.0);
    assert_eq!(snap.cost_performance_index, 1.0);
    assert_eq!(snap.cost_variance, 0.0);
    assert!((snap.estimate_at_completion - 2000.0).abs() < 1e-9);
}
