use chrono::Utc;
use navicue_core::config::StateConfig;
use navicue_core::{OutcomeKind, OutcomePayload, RawInput, ResponseKind, TerminalState, UserContext};
use navicue_normalizer::{apply, normalize};
use navicue_state::UserStateStore;
use proptest::prelude::*;
use test_fixtures::options_cue;

const OPTIONS: [&str; 5] = ["a", "b", "c", "d", "e"];

proptest! {
    /// Whatever order the user toggled in, the payload follows option order.
    #[test]
    fn selected_payload_is_sorted_by_option_position(
        picks in prop::sample::subsequence(OPTIONS.to_vec(), 1..=5).prop_shuffle(),
    ) {
        let def = options_cue("m", ResponseKind::Multiselect, &OPTIONS);
        let terminal = TerminalState {
            cue_id: "m".into(),
            response_kind: ResponseKind::Multiselect,
            outcome_kind: OutcomeKind::Completed,
            raw: RawInput::Selected(picks.iter().map(|s| s.to_string()).collect()),
            generation: 1,
            active_entered_at: None,
            ended_at: 0,
        };
        let OutcomePayload::Selected(values) = normalize(&terminal, &def, Utc::now()).payload().clone() else {
            panic!("expected a selection payload");
        };
        let positions: Vec<usize> = values.iter().filter_map(|v| def.option_index(v)).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(values.len(), picks.len());
    }

    /// Deferring never reinforces tags, however many times it happens.
    #[test]
    fn deferral_leaves_recent_tags_unchanged(
        seed_tags in prop::collection::vec("[a-d]", 0..6),
        deferrals in 1usize..10,
    ) {
        let mut store = UserStateStore::new(UserContext::new("u"), StateConfig::default());
        let tagged = options_cue("seed", ResponseKind::Select, &["x"]).with_tags(seed_tags.clone());
        let seed = TerminalState {
            cue_id: "seed".into(),
            response_kind: ResponseKind::Select,
            outcome_kind: OutcomeKind::Completed,
            raw: RawInput::Selected(vec!["x".into()]),
            generation: 1,
            active_entered_at: None,
            ended_at: 0,
        };
        apply(normalize(&seed, &tagged, Utc::now()), &mut store);
        let before: Vec<String> = store.mindblock().recent_tags_reinforced().iter().cloned().collect();

        let deferred_def = options_cue("later", ResponseKind::Select, &["x"]).with_tags(["z"]);
        for _ in 0..deferrals {
            let terminal = TerminalState {
                cue_id: "later".into(),
                response_kind: ResponseKind::Select,
                outcome_kind: OutcomeKind::Deferred,
                raw: RawInput::Nothing,
                generation: 2,
                active_entered_at: None,
                ended_at: 0,
            };
            apply(normalize(&terminal, &deferred_def, Utc::now()), &mut store);
        }
        let after: Vec<String> = store.mindblock().recent_tags_reinforced().iter().cloned().collect();
        prop_assert_eq!(before, after);
        prop_assert!(store.mindblock().is_open_loop("later"));
    }
}
