use chrono::Utc;
use navicue_core::config::StateConfig;
use navicue_core::{CueOutcome, OutcomeKind, OutcomePayload, UserContext};
use navicue_state::UserStateStore;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = OutcomeKind> {
    prop_oneof![
        Just(OutcomeKind::Completed),
        Just(OutcomeKind::Deferred),
        Just(OutcomeKind::Skipped),
    ]
}

fn arb_outcome() -> impl Strategy<Value = CueOutcome> {
    (
        "[a-h]",
        arb_kind(),
        prop::collection::vec("[a-e]", 0..4),
    )
        .prop_map(|(id, kind, tags)| {
            CueOutcome::new(id, kind, OutcomePayload::Empty, tags, Utc::now())
        })
}

proptest! {
    #[test]
    fn windows_never_exceed_capacity(
        shown_cap in 1usize..6,
        tag_cap in 1usize..8,
        outcomes in prop::collection::vec(arb_outcome(), 0..60),
    ) {
        let config = StateConfig {
            recent_shown_capacity: shown_cap,
            recent_tag_capacity: tag_cap,
            ..StateConfig::default()
        };
        let mut store = UserStateStore::new(UserContext::new("u"), config);
        for outcome in outcomes {
            store.record_outcome(outcome);
            let mb = store.mindblock();
            prop_assert!(mb.recently_shown().len() <= shown_cap);
            prop_assert!(mb.recent_tags_reinforced().len() <= tag_cap);
            prop_assert!((0.0..=1.0).contains(&mb.fatigue()));
        }
    }

    #[test]
    fn newest_outcome_is_always_in_recently_shown(
        outcomes in prop::collection::vec(arb_outcome(), 1..30),
    ) {
        let mut store = UserStateStore::new(UserContext::new("u"), StateConfig::default());
        for outcome in outcomes {
            let id = outcome.cue_id().to_string();
            store.record_outcome(outcome);
            prop_assert_eq!(
                store.mindblock().recently_shown().iter().last().map(String::as_str),
                Some(id.as_str())
            );
        }
    }
}
