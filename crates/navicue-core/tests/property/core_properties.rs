use navicue_core::constants::{MAX_STAGE_DURATION_MS, MAX_TAGS_PER_CUE};
use navicue_core::errors::CatalogError;
use navicue_core::{CueContainer, CueDefinition, CueFormat, CueOption, CueTiming, Pacing, ResponseKind};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = ResponseKind> {
    prop::sample::select(ResponseKind::ALL.to_vec())
}

fn arb_timing() -> impl Strategy<Value = CueTiming> {
    let ms = || prop::option::of(1..=MAX_STAGE_DURATION_MS);
    (ms(), ms(), ms(), ms()).prop_map(|(arriving_ms, present_ms, duration_ms, hold_target_ms)| {
        CueTiming {
            arriving_ms,
            present_ms,
            duration_ms,
            hold_target_ms,
        }
    })
}

/// Definitions built the way a catalog author is allowed to write them.
fn arb_valid_definition() -> impl Strategy<Value = CueDefinition> {
    (
        "[a-z][a-z-]{0,12}",
        arb_kind(),
        prop::collection::btree_set("[a-z]{1,6}", 1..8),
        prop::collection::btree_set("[a-z]{1,8}", 0..=MAX_TAGS_PER_CUE),
        prop::option::of(0usize..50),
        arb_timing(),
    )
        .prop_map(|(id, kind, values, tags, min_length, timing)| {
            let mut cue = CueDefinition::new(id, CueFormat::Card, CueContainer::Centered, kind)
                .with_tags(tags)
                .with_timing(timing);
            if kind.requires_options() {
                cue = cue.with_options(
                    values
                        .into_iter()
                        .map(|v| CueOption::new(v.clone(), v.to_uppercase()))
                        .collect(),
                );
            }
            if kind == ResponseKind::Text {
                if let Some(min) = min_length {
                    cue = cue.with_min_response_length(min);
                }
            }
            cue
        })
}

proptest! {
    #[test]
    fn well_formed_definitions_validate(cue in arb_valid_definition()) {
        prop_assert_eq!(cue.validate(), Ok(()));
    }

    #[test]
    fn any_timing_past_the_limit_is_rejected(
        cue in arb_valid_definition(),
        excess in 1..=u64::MAX - MAX_STAGE_DURATION_MS,
        field in 0usize..4,
    ) {
        let mut timing = cue.timing.clone();
        let value = Some(MAX_STAGE_DURATION_MS + excess);
        match field {
            0 => timing.arriving_ms = value,
            1 => timing.present_ms = value,
            2 => timing.duration_ms = value,
            _ => timing.hold_target_ms = value,
        }
        let rejected = matches!(
            cue.with_timing(timing).validate(),
            Err(CatalogError::InvalidTiming { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn pacing_orders_delays(ms in 0..=MAX_STAGE_DURATION_MS) {
        prop_assert_eq!(Pacing::Steady.scale(ms), ms);
        prop_assert!(Pacing::Brisk.scale(ms) <= ms);
        prop_assert!(Pacing::Slow.scale(ms) >= ms);
    }
}
