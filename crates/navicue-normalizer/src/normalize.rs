use chrono::{DateTime, Utc};

use navicue_core::{
    CueDefinition, CueOutcome, OutcomeKind, OutcomePayload, RawInput, ResponseKind, TerminalState,
};
use navicue_state::UserStateStore;

/// Build the canonical outcome for a finished presentation.
///
/// Deferred and skipped presentations carry an empty payload and reinforce no
/// tags. Completed ones reinforce every tag on the definition.
pub fn normalize(
    terminal: &TerminalState,
    definition: &CueDefinition,
    timestamp: DateTime<Utc>,
) -> CueOutcome {
    let (payload, tags) = match terminal.outcome_kind {
        OutcomeKind::Completed => (
            completed_payload(&terminal.raw, definition),
            definition.tags.iter().cloned().collect(),
        ),
        OutcomeKind::Deferred | OutcomeKind::Skipped => (OutcomePayload::Empty, Vec::new()),
    };
    CueOutcome::new(
        terminal.cue_id.clone(),
        terminal.outcome_kind,
        payload,
        tags,
        timestamp,
    )
}

fn completed_payload(raw: &RawInput, definition: &CueDefinition) -> OutcomePayload {
    match (definition.response_kind, raw) {
        (ResponseKind::Text, RawInput::Text(text)) => OutcomePayload::Text(text.trim().to_string()),
        (ResponseKind::Text, _) => OutcomePayload::Text(String::new()),
        (ResponseKind::Select | ResponseKind::Multiselect, RawInput::Selected(values)) => {
            OutcomePayload::Selected(in_catalog_order(values, definition))
        }
        (ResponseKind::Select | ResponseKind::Multiselect, _) => OutcomePayload::Selected(Vec::new()),
        (
            ResponseKind::Hold | ResponseKind::Timer | ResponseKind::SitWithIt | ResponseKind::None,
            _,
        ) => OutcomePayload::Completion(true),
    }
}

/// Selected values in the definition's option order. Unknown values and
/// duplicates are dropped.
fn in_catalog_order(values: &[String], definition: &CueDefinition) -> Vec<String> {
    let mut indexed: Vec<(usize, &String)> = values
        .iter()
        .filter_map(|v| definition.option_index(v).map(|i| (i, v)))
        .collect();
    indexed.sort_by_key(|(i, _)| *i);
    indexed.dedup_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, v)| v.clone()).collect()
}

/// Apply an outcome to the user's state. The only way mindblock state changes.
pub fn apply(outcome: CueOutcome, store: &mut UserStateStore) -> &CueOutcome {
    store.record_outcome(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navicue_core::{CueContainer, CueFormat, CueOption};

    fn terminal(kind: ResponseKind, outcome_kind: OutcomeKind, raw: RawInput) -> TerminalState {
        TerminalState {
            cue_id: "c".to_string(),
            response_kind: kind,
            outcome_kind,
            raw,
            generation: 1,
            active_entered_at: Some(0),
            ended_at: 10,
        }
    }

    #[test]
    fn selected_values_follow_option_order() {
        let cue = CueDefinition::new("c", CueFormat::Card, CueContainer::Centered, ResponseKind::Multiselect)
            .with_options(vec![
                CueOption::new("a", "A"),
                CueOption::new("b", "B"),
                CueOption::new("c", "C"),
            ]);
        let raw = RawInput::Selected(vec!["c".into(), "a".into(), "c".into(), "zz".into()]);
        let outcome = normalize(
            &terminal(ResponseKind::Multiselect, OutcomeKind::Completed, raw),
            &cue,
            Utc::now(),
        );
        assert_eq!(
            outcome.payload(),
            &OutcomePayload::Selected(vec!["a".into(), "c".into()])
        );
    }

    #[test]
    fn missing_text_normalizes_to_empty_string() {
        let cue = CueDefinition::new("c", CueFormat::Card, CueContainer::Centered, ResponseKind::Text);
        let outcome = normalize(
            &terminal(ResponseKind::Text, OutcomeKind::Completed, RawInput::Nothing),
            &cue,
            Utc::now(),
        );
        assert_eq!(outcome.payload(), &OutcomePayload::Text(String::new()));
    }
}
