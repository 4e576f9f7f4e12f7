use navicue_core::config::LifecycleConfig;
use navicue_core::{LifecycleStage, Pacing, ResponseKind};
use navicue_lifecycle::{InputAck, InputEvent, LifecycleController};
use proptest::prelude::*;
use test_fixtures::{hold_cue, options_cue, text_cue, timed_cue};

fn arb_event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        "[a-z ]{0,4}".prop_map(InputEvent::TypeText),
        Just(InputEvent::Backspace),
        Just(InputEvent::Submit),
        "[xyz]".prop_map(InputEvent::Choose),
        "[xyz]".prop_map(InputEvent::Toggle),
        Just(InputEvent::Press),
        Just(InputEvent::Release),
        Just(InputEvent::Continue),
        Just(InputEvent::Defer),
        Just(InputEvent::Skip),
    ]
}

fn arb_kind() -> impl Strategy<Value = ResponseKind> {
    prop::sample::select(ResponseKind::ALL.to_vec())
}

fn controller_for(kind: ResponseKind) -> LifecycleController {
    let cue = match kind {
        ResponseKind::Text => text_cue("c", 2),
        ResponseKind::Select | ResponseKind::Multiselect => options_cue("c", kind, &["x", "y"]),
        ResponseKind::Hold => hold_cue("c", 400),
        ResponseKind::Timer | ResponseKind::SitWithIt => timed_cue("c", kind, 600),
        ResponseKind::None => test_fixtures::cue("c", kind),
    };
    LifecycleController::new(cue, &LifecycleConfig::default(), Pacing::Steady)
}

fn rank(stage: LifecycleStage) -> u8 {
    match stage {
        LifecycleStage::Arriving => 0,
        LifecycleStage::Present => 1,
        LifecycleStage::Active => 2,
        LifecycleStage::Resonant => 3,
        LifecycleStage::Afterglow => 4,
    }
}

proptest! {
    /// Stages only move forward, input is only accepted while active, and the
    /// terminal hand-off happens at most once.
    #[test]
    fn arbitrary_interaction_respects_stage_rules(
        kind in arb_kind(),
        steps in prop::collection::vec((arb_event(), 0u64..1_500), 0..40),
    ) {
        let mut c = controller_for(kind);
        c.start(0).unwrap();
        let mut now = 0;
        let mut handed_off = 0;
        let mut last = rank(c.current_stage());

        for (event, gap) in steps {
            now += gap;
            c.tick(now);
            let before = c.current_stage();
            if let Ok(InputAck::Accepted) = c.handle(event, now) {
                prop_assert_eq!(before, LifecycleStage::Active);
            }
            let current = rank(c.current_stage());
            prop_assert!(current >= last);
            last = current;
            if c.take_terminal().is_some() {
                handed_off += 1;
                prop_assert_eq!(c.current_stage(), LifecycleStage::Afterglow);
            }
        }
        prop_assert!(handed_off <= 1);
    }

    /// Once cancelled, nothing the host does revives the controller.
    #[test]
    fn cancelled_controller_stays_inert(
        kind in arb_kind(),
        cancel_at in 0u64..4_000,
        events in prop::collection::vec(arb_event(), 0..10),
    ) {
        let mut c = controller_for(kind);
        c.start(0).unwrap();
        c.tick(cancel_at);
        let stage = c.current_stage();
        c.cancel();

        for event in events {
            prop_assert_eq!(c.handle(event, cancel_at).unwrap(), InputAck::Ignored);
        }
        prop_assert_eq!(c.tick(cancel_at + 100_000), 0);
        prop_assert_eq!(c.current_stage(), stage);
        prop_assert!(c.take_terminal().is_none());
    }
}
