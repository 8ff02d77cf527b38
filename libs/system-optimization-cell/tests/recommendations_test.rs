// =====================================================================================
// RECOMMENDATION GENERATOR TESTS
// =====================================================================================

use system_optimization_cell::{
    generate_recommendations, Issue, IssueCategory, IssueSeverity, MetricSnapshot,
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

fn dummy_issue() -> Issue {
    Issue {
        id: "test-issue".to_string(),
        severity: IssueSeverity::Low,
        category: IssueCategory::Performance,
        description: "test".to_string(),
        impact: "test".to_string(),
        solution: "test".to_string(),
        auto_fix: false,
        priority: 4,
    }
}

#[test]
fn test_healthy_system_gets_no_recommendations() {
    let snap = snapshot(10.0, 40.0, 20.0, 5.0, 100.0, 100.0);
    let recommendations = generate_recommendations(&snap, &[]);
    assert!(recommendations.is_empty());
}

#[test]
fn test_memory_threshold_is_strict() {
    let snap = snapshot(10.0, 80.0, 20.0, 5.0, 100.0, 100.0);
    assert!(generate_recommendations(&snap, &[]).is_empty());

    let snap = snapshot(10.0, 80.1, 20.0, 5.0, 100.0, 100.0);
    let recommendations = generate_recommendations(&snap, &[]);
    assert_eq!(recommendations.len(), 2);
    assert!(recommendations[0].contains("memory"));
}

#[test]
fn test_cpu_pressure_adds_advice() {
    let snap = snapshot(76.0, 40.0, 20.0, 5.0, 100.0, 100.0);
    let recommendations = generate_recommendations(&snap, &[]);
    assert_eq!(recommendations.len(), 2);
    assert!(recommendations.iter().any(|r| r.contains("Profile")));
}

#[test]
fn test_degraded_data_store_adds_advice() {
    let snap = snapshot(10.0, 40.0, 20.0, 5.0, 75.0, 100.0);
    let recommendations = generate_recommendations(&snap, &[]);
    assert_eq!(recommendations.len(), 2);
    assert!(recommendations.iter().any(|r| r.contains("statistics")));
}

#[test]
fn test_all_rules_stack_without_deduplication() {
    let snap = snapshot(80.0, 90.0, 20.0, 5.0, 60.0, 100.0);
    let issues: Vec<Issue> = (0..6).map(|_| dummy_issue()).collect();

    let recommendations = generate_recommendations(&snap, &issues);
    // 2 memory + 2 cpu + 2 data store + 1 issue-count.
    assert_eq!(recommendations.len(), 7);
    assert!(recommendations
        .iter()
        .any(|r| r.contains("maintenance window")));
}

#[test]
fn test_issue_count_threshold_is_strict() {
    let snap = snapshot(10.0, 40.0, 20.0, 5.0, 100.0, 100.0);
    let five: Vec<Issue> = (0..5).map(|_| dummy_issue()).collect();
    assert!(generate_recommendations(&snap, &five).is_empty());

    let six: Vec<Issue> = (0..6).map(|_| dummy_issue()).collect();
    assert_eq!(generate_recommendations(&snap, &six).len(), 1);
}
