// =====================================================================================
// HEALTH SCORER TESTS
// =====================================================================================

use system_optimization_cell::{
    detect_issues, score_snapshot, HealthStatus, Issue, IssueCategory, IssueSeverity,
    MetricSnapshot,
};

fn snapshot(
    cpu: f64,
    memory: f64,
    disk: f64,
    network: f64,
    data_store: f64,
    cache: f64,
) -> MetricSnapshot {
    MetricSnapshot {
        cpu_percent: cpu,
        memory_percent: memory,
        disk_percent: disk,
        network_percent: network,
        data_store_health: data_store,
        cache_health: cache,
        collected_at: chrono::Utc::now(),
    }
}

fn issue(severity: IssueSeverity) -> Issue {
    Issue {
        id: "test-issue".to_string(),
        severity,
        category: IssueCategory::Performance,
        description: "test".to_string(),
        impact: "test".to_string(),
        solution: "test".to_string(),
        auto_fix: false,
        priority: 1,
    }
}

fn perfect_snapshot() -> MetricSnapshot {
    snapshot(0.0, 0.0, 0.0, 0.0, 100.0, 100.0)
}

#[test]
fn test_score_stays_in_range_for_any_metric_combination() {
    let values = [0.0, 25.0, 50.0, 75.0, 100.0];

    for &v in &values {
        for &w in &values {
            let snap = snapshot(v, w, v, w, v, w);
            let issues = detect_issues(&snap);
            let (score, _) = score_snapshot(&snap, &issues);
            assert!(score <= 100, "Score {} out of range for {}/{}", score, v, w);
        }
    }
}

#[test]
fn test_score_clamped_at_zero_under_heavy_deductions() {
    let stacked: Vec<Issue> = (0..10).map(|_| issue(IssueSeverity::Critical)).collect();
    let (score, status) = score_snapshot(&perfect_snapshot(), &stacked);

    assert_eq!(score, 0);
    assert_eq!(status, HealthStatus::Critical);
}

#[test]
fn test_perfect_snapshot_scores_one_hundred() {
    let (score, status) = score_snapshot(&perfect_snapshot(), &[]);
    assert_eq!(score, 100);
    assert_eq!(status, HealthStatus::Healthy);
}

#[test]
fn test_critical_issue_forces_critical_status_despite_high_score() {
    let issues = vec![issue(IssueSeverity::Critical)];
    let (score, status) = score_snapshot(&perfect_snapshot(), &issues);

    assert_eq!(score, 80, "One critical issue deducts 20");
    assert_eq!(
        status,
        HealthStatus::Critical,
        "A critical issue is a hard override, not just a deduction"
    );
}

#[test]
fn test_status_band_boundaries() {
    // Base score 100; pull it to exact boundaries with non-critical issues.
    // 70 points: 7 high.
    let seventy: Vec<Issue> = (0..7).map(|_| issue(IssueSeverity::High)).collect();
    let (score, status) = score_snapshot(&perfect_snapshot(), &seventy);
    assert_eq!(score, 30);
    assert_eq!(status, HealthStatus::Warning, "Score 30 is warning, not critical");

    // 71 points: 6 high + 1 medium + 3 low.
    let mut seventy_one: Vec<Issue> = (0..6).map(|_| issue(IssueSeverity::High)).collect();
    seventy_one.push(issue(IssueSeverity::Medium));
    seventy_one.extend((0..3).map(|_| issue(IssueSeverity::Low)));
    let (score, status) = score_snapshot(&perfect_snapshot(), &seventy_one);
    assert_eq!(score, 29);
    assert_eq!(
        status,
        HealthStatus::Critical,
        "Score below 30 is critical even without a critical issue"
    );

    // 30 points: 3 high.
    let thirty: Vec<Issue> = (0..3).map(|_| issue(IssueSeverity::High)).collect();
    let (score, status) = score_snapshot(&perfect_snapshot(), &thirty);
    assert_eq!(score, 70);
    assert_eq!(status, HealthStatus::Healthy, "Score 70 is healthy");

    // 31 points: 3 high + 1 low + ... 30 + 2 = 32? Use 2 high + 2 medium + 1 low = 31.
    let mut thirty_one: Vec<Issue> = (0..2).map(|_| issue(IssueSeverity::High)).collect();
    thirty_one.extend((0..2).map(|_| issue(IssueSeverity::Medium)));
    thirty_one.push(issue(IssueSeverity::Low));
    let (score, status) = score_snapshot(&perfect_snapshot(), &thirty_one);
    assert_eq!(score, 69);
    assert_eq!(status, HealthStatus::Warning);
}

#[test]
fn test_usage_metrics_are_inverted_before_weighting() {
    // Full utilization everywhere with perfect dependencies: only the
    // dependency channels contribute. 100*.2 + 100*.1 = 30.
    let snap = snapshot(100.0, 100.0, 100.0, 100.0, 100.0, 100.0);
    let (score, _) = score_snapshot(&snap, &[]);
    assert_eq!(score, 30);
}

#[test]
fn test_end_to_end_scenario_memory_pressure() {
    let snap = snapshot(50.0, 90.0, 30.0, 20.0, 95.0, 95.0);

    let issues = detect_issues(&snap);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].id, "high-memory-usage");
    assert_eq!(issues[0].severity, IssueSeverity::High);
    assert_eq!(issues[0].priority, 2);

    // Weighted base: 10 + 2 + 10.5 + 12 + 19 + 9.5 = 63, minus 10 for the
    // high issue.
    let (score, status) = score_snapshot(&snap, &issues);
    assert_eq!(score, 53);
    assert_eq!(status, HealthStatus::Warning);
}
