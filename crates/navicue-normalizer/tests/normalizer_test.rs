use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;
use navicue_core::config::StateConfig;
use navicue_core::errors::{NavicueError, NavicueResult};
use navicue_core::traits::IOutcomeSink;
use navicue_core::{
    CueOutcome, OutcomeKind, OutcomePayload, RawInput, ResponseKind, TerminalState, UserContext,
};
use navicue_normalizer::{apply, normalize, Normalizer};
use navicue_observability::TelemetryLog;
use navicue_state::UserStateStore;
use test_fixtures::{cue, options_cue, text_cue};

fn terminal(cue_id: &str, kind: ResponseKind, outcome: OutcomeKind, raw: RawInput) -> TerminalState {
    TerminalState {
        cue_id: cue_id.to_string(),
        response_kind: kind,
        outcome_kind: outcome,
        raw,
        generation: 7,
        active_entered_at: Some(1_000),
        ended_at: 4_000,
    }
}

fn store() -> UserStateStore {
    UserStateStore::new(UserContext::new("u"), StateConfig::default())
}

// ── normalize ─────────────────────────────────────────────────────────────

#[test]
fn text_is_trimmed() {
    let def = text_cue("t", 0).with_tags(["grief"]);
    let t = terminal("t", ResponseKind::Text, OutcomeKind::Completed, RawInput::Text("  let it land \n".into()));
    let outcome = normalize(&t, &def, Utc::now());
    assert_eq!(outcome.payload(), &OutcomePayload::Text("let it land".into()));
    assert_eq!(outcome.tags_reinforced(), ["grief".to_string()]);
    assert!(outcome.is_completed());
}

#[test]
fn multiselect_after_toggling_yields_remaining_value() {
    let def = options_cue("m", ResponseKind::Multiselect, &["x", "y"]);
    let t = terminal("m", ResponseKind::Multiselect, OutcomeKind::Completed, RawInput::Selected(vec!["y".into()]));
    let outcome = normalize(&t, &def, Utc::now());
    assert_eq!(outcome.payload(), &OutcomePayload::Selected(vec!["y".into()]));
}

#[test]
fn multiselect_values_come_back_in_catalog_order() {
    let def = options_cue("m", ResponseKind::Multiselect, &["calm", "tight", "open"]);
    let raw = RawInput::Selected(vec!["open".into(), "calm".into()]);
    let t = terminal("m", ResponseKind::Multiselect, OutcomeKind::Completed, raw);
    assert_eq!(
        normalize(&t, &def, Utc::now()).payload(),
        &OutcomePayload::Selected(vec!["calm".into(), "open".into()])
    );
}

#[test]
fn single_select_is_a_one_element_selection() {
    let def = options_cue("s", ResponseKind::Select, &["x", "y"]);
    let t = terminal("s", ResponseKind::Select, OutcomeKind::Completed, RawInput::Selected(vec!["x".into()]));
    assert_eq!(
        normalize(&t, &def, Utc::now()).payload(),
        &OutcomePayload::Selected(vec!["x".into()])
    );
}

#[test]
fn presence_kinds_complete_with_true() {
    for kind in [ResponseKind::Hold, ResponseKind::Timer, ResponseKind::SitWithIt, ResponseKind::None] {
        let def = cue("p", kind);
        let raw = if kind == ResponseKind::None { RawInput::Nothing } else { RawInput::Completed };
        let outcome = normalize(&terminal("p", kind, OutcomeKind::Completed, raw), &def, Utc::now());
        assert_eq!(outcome.payload(), &OutcomePayload::Completion(true), "{kind}");
    }
}

#[test]
fn deferred_and_skipped_carry_nothing() {
    let def = text_cue("t", 0).with_tags(["grief", "body"]);
    for kind in [OutcomeKind::Deferred, OutcomeKind::Skipped] {
        let outcome = normalize(&terminal("t", ResponseKind::Text, kind, RawInput::Nothing), &def, Utc::now());
        assert_eq!(outcome.outcome_kind(), kind);
        assert_eq!(outcome.payload(), &OutcomePayload::Empty);
        assert!(outcome.tags_reinforced().is_empty());
    }
}

#[test]
fn every_outcome_gets_a_fresh_id() {
    let def = cue("n", ResponseKind::None);
    let t = terminal("n", ResponseKind::None, OutcomeKind::Completed, RawInput::Nothing);
    let a = normalize(&t, &def, Utc::now());
    let b = normalize(&t, &def, Utc::now());
    assert_ne!(a.outcome_id(), b.outcome_id());
}

// ── apply ─────────────────────────────────────────────────────────────────

#[test]
fn apply_updates_recent_windows_and_history() {
    let mut store = store();
    let def = cue("h", ResponseKind::Hold).with_tags(["body"]);
    let outcome = normalize(&terminal("h", ResponseKind::Hold, OutcomeKind::Completed, RawInput::Completed), &def, Utc::now());

    apply(outcome, &mut store);
    let mb = store.mindblock();
    assert!(mb.recently_shown().contains_str("h"));
    assert!(mb.recent_tags_reinforced().contains_str("body"));
    assert_eq!(mb.presentations(), 1);
    assert_eq!(store.history().len(), 1);
}

#[test]
fn deferral_opens_a_loop_and_reinforces_nothing() {
    let mut store = store();
    let def = text_cue("t", 0).with_tags(["grief"]);
    let outcome = normalize(&terminal("t", ResponseKind::Text, OutcomeKind::Deferred, RawInput::Nothing), &def, Utc::now());

    apply(outcome, &mut store);
    let mb = store.mindblock();
    assert!(mb.recently_shown().contains_str("t"));
    assert!(mb.recent_tags_reinforced().is_empty());
    assert!(mb.is_open_loop("t"));
    assert!(mb.fatigue() > 0.0);
}

// ── Normalizer + sinks ────────────────────────────────────────────────────

#[derive(Default)]
struct CountingSink(AtomicUsize);

impl IOutcomeSink for CountingSink {
    fn name(&self) -> &str {
        "counting"
    }

    fn on_outcome(&self, _outcome: &CueOutcome) -> NavicueResult<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingSink;

impl IOutcomeSink for FailingSink {
    fn name(&self) -> &str {
        "failing"
    }

    fn on_outcome(&self, _outcome: &CueOutcome) -> NavicueResult<()> {
        Err(NavicueError::SinkFailed {
            sink: "failing".into(),
            reason: "offline".into(),
        })
    }
}

#[test]
fn normalizer_applies_then_notifies_every_sink() {
    let counting = Arc::new(CountingSink::default());
    let telemetry = Arc::new(TelemetryLog::new(8));
    let normalizer = Normalizer::new()
        .with_sink(Arc::new(FailingSink))
        .with_sink(counting.clone())
        .with_sink(telemetry.clone());
    assert_eq!(normalizer.sink_count(), 3);

    let mut store = store();
    let def = options_cue("s", ResponseKind::Select, &["x", "y"]).with_tags(["voice"]);
    let t = terminal("s", ResponseKind::Select, OutcomeKind::Completed, RawInput::Selected(vec!["y".into()]));
    let outcome = normalizer.process(&t, &def, &mut store, Utc::now());

    // A failing sink does not stop later sinks or roll back the state.
    assert_eq!(counting.0.load(Ordering::SeqCst), 1);
    assert_eq!(telemetry.count(), 1);
    assert_eq!(telemetry.events()[0].outcome_id, outcome.outcome_id());
    assert_eq!(store.history()[0], outcome);
    assert!(store.mindblock().recent_tags_reinforced().contains_str("voice"));
}

#[test]
fn normalizer_debug_lists_sink_names() {
    let normalizer = Normalizer::new().with_sink(Arc::new(FailingSink));
    assert!(format!("{normalizer:?}").contains("failing"));
}
