use chrono::Utc;
use navicue_core::config::StateConfig;
use navicue_core::{CueOutcome, OutcomeKind, OutcomePayload, UserContext};
use navicue_state::{MindblockState, StateSnapshot, UserStateStore};

fn outcome(cue_id: &str, kind: OutcomeKind, tags: &[&str]) -> CueOutcome {
    CueOutcome::new(
        cue_id,
        kind,
        OutcomePayload::Empty,
        tags.iter().map(|t| t.to_string()).collect(),
        Utc::now(),
    )
}

fn store() -> UserStateStore {
    UserStateStore::new(UserContext::new("u1"), StateConfig::default())
}

#[test]
fn record_pushes_shown_and_tags_and_history() {
    let mut store = store();
    store.record_outcome(outcome("a", OutcomeKind::Completed, &["grounding", "acceptance"]));

    let mb = store.mindblock();
    assert!(mb.recently_shown().contains_str("a"));
    assert_eq!(mb.recent_tags_reinforced().len(), 2);
    assert_eq!(mb.presentations(), 1);
    assert_eq!(store.history().len(), 1);
}

#[test]
fn recently_shown_evicts_oldest_at_capacity() {
    let config = StateConfig {
        recent_shown_capacity: 2,
        ..StateConfig::default()
    };
    let mut store = UserStateStore::new(UserContext::new("u1"), config);
    for id in ["a", "b", "c"] {
        store.record_outcome(outcome(id, OutcomeKind::Completed, &[]));
    }
    let shown: Vec<&String> = store.mindblock().recently_shown().iter().collect();
    assert_eq!(shown, vec!["b", "c"]);
    // History is not windowed.
    assert_eq!(store.history().len(), 3);
}

#[test]
fn deferral_opens_a_loop_and_completion_closes_it() {
    let mut store = store();
    store.record_outcome(outcome("a", OutcomeKind::Deferred, &[]));
    assert!(store.mindblock().is_open_loop("a"));

    store.record_outcome(outcome("a", OutcomeKind::Completed, &["grounding"]));
    assert!(!store.mindblock().is_open_loop("a"));
}

#[test]
fn fatigue_rises_on_skip_and_falls_on_completion() {
    let mut store = store();
    store.record_outcome(outcome("a", OutcomeKind::Skipped, &[]));
    store.record_outcome(outcome("b", OutcomeKind::Deferred, &[]));
    let raised = store.mindblock().fatigue();
    assert!((raised - 0.3).abs() < 1e-9);

    store.record_outcome(outcome("c", OutcomeKind::Completed, &[]));
    assert!(store.mindblock().fatigue() < raised);
}

#[test]
fn fatigue_is_clamped() {
    let mut store = store();
    store.record_outcome(outcome("a", OutcomeKind::Completed, &[]));
    assert_eq!(store.mindblock().fatigue(), 0.0);
    for i in 0..20 {
        store.record_outcome(outcome(&format!("s{i}"), OutcomeKind::Skipped, &[]));
    }
    assert_eq!(store.mindblock().fatigue(), 1.0);
}

#[test]
fn snapshot_roundtrips_through_json() {
    let mut store = store();
    store.record_outcome(outcome("a", OutcomeKind::Completed, &["grounding"]));
    let snapshot = store.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: StateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);

    let restored = UserStateStore::restore(back, StateConfig::default());
    assert!(restored.mindblock().recently_shown().contains_str("a"));
    assert_eq!(restored.history().len(), 1);
}

#[test]
fn deserialized_window_respects_capacity() {
    let json = r#"{"capacity": 2, "entries": ["a", "b", "c"]}"#;
    let window: navicue_state::RecentWindow<String> = serde_json::from_str(json).unwrap();
    assert_eq!(window.len(), 2);
    assert!(!window.contains_str("a"));
}

#[test]
fn builder_restores_persisted_state() {
    let mb = MindblockState::builder(2, 4)
        .shown(["a", "b", "c"])
        .tags(["grounding"])
        .fatigue(0.4)
        .open_loop("z")
        .build();
    assert_eq!(mb.recently_shown().len(), 2);
    assert!(mb.recent_tags_reinforced().contains_str("grounding"));
    assert!(mb.is_open_loop("z"));
    assert!((mb.fatigue() - 0.4).abs() < 1e-9);
}
