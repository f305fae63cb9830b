//! Confidence Gate API Tests
//!
//! Exercises the public request/response surface of the confidence gate the
//! way a host integration (CLI flag parsing, MCP tool wrapper) would.

use airis_runtime::{
    token_budget, Complexity, ConfidenceAction, ConfidenceRequest, ConfidenceResponse,
    ConfidenceScorer, Signal,
};

/// Request with every process-gate check complete
fn fully_checked_request(task: &str) -> ConfidenceRequest {
    ConfidenceRequest::new(task)
        .with_signal(Signal::DuplicateCheckComplete, true)
        .with_signal(Signal::ArchitectureCheckComplete, true)
        .with_signal(Signal::OfficialDocsVerified, true)
        .with_signal(Signal::OssReferenceComplete, true)
        .with_signal(Signal::RootCauseIdentified, true)
}

#[test]
fn fully_checked_task_proceeds() {
    let scorer = ConfidenceScorer::default();
    let response = scorer.assess(&fully_checked_request("Ship feature")).unwrap();

    assert!(response.score >= 0.9);
    assert_eq!(response.action, ConfidenceAction::Proceed);
    assert!(!response.checklist.is_empty());
}

#[test]
fn unchecked_task_asks_questions() {
    let scorer = ConfidenceScorer::default();
    let response = scorer
        .assess(&ConfidenceRequest::new("Investigate bug"))
        .unwrap();

    assert_eq!(response.score, 0.0);
    assert_eq!(response.action, ConfidenceAction::AskQuestions);
    assert_eq!(response.checklist.len(), Signal::ALL.len());
}

#[test]
fn response_wire_shape_is_stable() {
    let scorer = ConfidenceScorer::default();
    let response = scorer
        .assess(
            &ConfidenceRequest::new("Wire shape").with_signal(Signal::OfficialDocsVerified, true),
        )
        .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert!(value.get("score").is_some());
    assert_eq!(value["action"], "ask_questions");
    let checklist = value["checklist"].as_array().unwrap();
    assert_eq!(checklist.len(), Signal::ALL.len());
    for entry in checklist {
        assert!(entry.get("name").is_some());
        assert!(entry.get("satisfied").is_some());
        assert!(entry.get("weight").is_some());
    }
    assert_eq!(checklist[0]["name"], "duplicate_check_complete");
}

#[test]
fn response_round_trips_through_json() {
    let scorer = ConfidenceScorer::default();
    let response = scorer.assess(&fully_checked_request("Round trip")).unwrap();

    let json = serde_json::to_string(&response).unwrap();
    let decoded: ConfidenceResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn sparse_wire_request_gets_defaults() {
    let request: ConfidenceRequest =
        serde_json::from_str(r#"{"task_description": "Ship feature"}"#).unwrap();

    assert_eq!(request.complexity, Complexity::Medium);
    for signal in Signal::ALL {
        assert!(!request.is_satisfied(signal));
    }
    assert!(request.metadata.is_empty());
}

#[test]
fn extra_wire_fields_are_ignored() {
    let request: ConfidenceRequest = serde_json::from_str(
        r#"{
            "task_description": "Ship feature",
            "complexity": "complex",
            "root_cause_identified": true,
            "vibes_are_good": true
        }"#,
    )
    .unwrap();

    assert_eq!(request.complexity, Complexity::Complex);
    assert!(request.root_cause_identified);

    let scorer = ConfidenceScorer::default();
    let response = scorer.assess(&request).unwrap();
    assert_eq!(response.score, 0.15);
}

#[test]
fn metadata_does_not_influence_the_score() {
    let scorer = ConfidenceScorer::default();
    let plain = ConfidenceRequest::new("Annotated task");
    let annotated = plain
        .clone()
        .with_metadata("ticket".to_string(), "AIR-142".to_string());

    let plain_response = scorer.assess(&plain).unwrap();
    let annotated_response = scorer.assess(&annotated).unwrap();
    assert_eq!(plain_response.score, annotated_response.score);
    assert_eq!(plain_response.action, annotated_response.action);
}

#[test]
fn complexity_feeds_the_token_budget_not_the_score() {
    let scorer = ConfidenceScorer::default();
    let request = ConfidenceRequest::new("Budgeted task").with_complexity(Complexity::Complex);
    let response = scorer.assess(&request).unwrap();

    assert_eq!(response.score, 0.0);
    assert_eq!(token_budget(request.complexity), 2500);
    assert_eq!(token_budget(Complexity::default()), 1000);
}
