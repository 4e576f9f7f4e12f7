use navicue_catalog::Catalog;
use navicue_core::config::SelectionConfig;
use navicue_core::{ResponseKind, UserContext};
use navicue_selection::{SelectionStrategy, Selector};
use navicue_state::MindblockState;
use proptest::prelude::*;
use test_fixtures::cue;

const TAGS: [&str; 4] = ["grounding", "acceptance", "self-compassion", "cognitive-reframing"];

fn arb_kind() -> impl Strategy<Value = ResponseKind> {
    prop::sample::select(ResponseKind::ALL.to_vec())
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((arb_kind(), prop::collection::vec(0usize..4, 0..3)), 1..10).prop_map(
        |specs| {
            let cues = specs
                .into_iter()
                .enumerate()
                .map(|(i, (kind, tags))| {
                    cue(&format!("c{i}"), kind).with_tags(tags.into_iter().map(|t| TAGS[t]))
                })
                .collect();
            Catalog::new(cues).expect("generated catalog is valid")
        },
    )
}

fn arb_mindblock() -> impl Strategy<Value = MindblockState> {
    (
        1usize..6,
        prop::collection::vec(0usize..12, 0..8),
        prop::collection::vec(0usize..4, 0..8),
        0.0f64..1.0,
        0u64..50,
    )
        .prop_map(|(cap, shown, tags, fatigue, presentations)| {
            MindblockState::builder(cap, 8)
                .shown(shown.into_iter().map(|i| format!("c{i}")))
                .tags(tags.into_iter().map(|t| TAGS[t]))
                .fatigue(fatigue)
                .presentations(presentations)
                .build()
        })
}

proptest! {
    #[test]
    fn selection_is_deterministic(
        catalog in arb_catalog(),
        mindblock in arb_mindblock(),
        seed in any::<u64>(),
    ) {
        let ctx = UserContext::new("u").with_preferred_tags(["grounding"]);
        let config = SelectionConfig { jitter: 0.5, ..SelectionConfig::default() };
        let selector = Selector::seeded(config, seed);

        let first = selector.select_next(&ctx, &mindblock, &catalog).unwrap();
        let second = selector.select_next(&ctx, &mindblock, &catalog).unwrap();
        prop_assert_eq!(&first.id, &second.id);
    }

    #[test]
    fn selected_cue_is_not_recent_unless_pool_exhausted(
        catalog in arb_catalog(),
        mindblock in arb_mindblock(),
    ) {
        let ctx = UserContext::new("u");
        let chosen = Selector::default().select_next(&ctx, &mindblock, &catalog).unwrap();

        let unshown_exists = catalog
            .iter()
            .any(|c| !mindblock.recently_shown().contains_str(&c.id));
        if unshown_exists {
            prop_assert!(!mindblock.recently_shown().contains_str(&chosen.id));
        }
    }

    #[test]
    fn non_empty_catalog_always_yields_a_cue(
        catalog in arb_catalog(),
        mindblock in arb_mindblock(),
    ) {
        let ctx = UserContext::new("u");
        prop_assert!(Selector::default().select_next(&ctx, &mindblock, &catalog).is_ok());
    }
}
