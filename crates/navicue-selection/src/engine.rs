//! Selector: weighted, deterministic choice of the next cue.

use navicue_catalog::Catalog;
use navicue_core::config::SelectionConfig;
use navicue_core::errors::SelectionError;
use navicue_core::{CueDefinition, UserContext};
use navicue_observability::selection_span;
use navicue_state::MindblockState;

use crate::jitter::SeededJitter;
use crate::pool::{self, Relaxation};
use crate::scorer::{self, ScoreBreakdown, ScoredCue};

/// Picks the next cue to present. Implementations must be pure: identical
/// inputs yield the identical cue, and no input is mutated.
pub trait SelectionStrategy: Send + Sync {
    fn select_next<'c>(
        &self,
        context: &UserContext,
        mindblock: &MindblockState,
        catalog: &'c Catalog,
    ) -> Result<&'c CueDefinition, SelectionError>;
}

/// The chosen cue with the reasoning behind it.
#[derive(Debug, Clone)]
pub struct Selection<'c> {
    pub cue: &'c CueDefinition,
    pub weight: f64,
    pub breakdown: ScoreBreakdown,
    pub relaxation: Relaxation,
    /// Size of the pool before recency exclusion.
    pub pool_size: usize,
}

/// Weighted selector. Deterministic by default; jitter only with an explicit seed.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectionConfig,
    jitter: Option<SeededJitter>,
}

impl Selector {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            jitter: None,
        }
    }

    /// Selector with seeded jitter of amplitude `config.jitter`.
    pub fn seeded(config: SelectionConfig, seed: u64) -> Self {
        Self {
            config,
            jitter: Some(SeededJitter::new(seed)),
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Every eligible candidate, heaviest first; ties keep catalog order.
    pub fn rank<'c>(
        &self,
        context: &UserContext,
        mindblock: &MindblockState,
        catalog: &'c Catalog,
        filter_tags: Option<&[String]>,
    ) -> Result<(Vec<ScoredCue<'c>>, Relaxation), SelectionError> {
        let candidates = catalog.get_candidates(filter_tags);
        if candidates.is_empty() {
            let reason = match filter_tags {
                Some(tags) if !catalog.is_empty() => format!("no cue matches tags {tags:?}"),
                _ => "catalog is empty".to_string(),
            };
            return Err(SelectionError::NoCandidate { reason });
        }

        let (eligible, relaxation) = pool::eligible(&candidates, mindblock);
        if relaxation != Relaxation::None {
            tracing::debug!(
                user_id = %context.user_id,
                relaxation = ?relaxation,
                "recency exclusion relaxed"
            );
        }

        let mut scored: Vec<ScoredCue<'c>> = eligible
            .into_iter()
            .enumerate()
            .map(|(i, cue)| {
                let position = catalog.position(&cue.id).unwrap_or(i);
                scorer::score(
                    cue,
                    position,
                    context,
                    mindblock,
                    &self.config,
                    self.jitter.as_ref(),
                )
            })
            .collect();

        scored.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.position.cmp(&b.position))
        });

        Ok((scored, relaxation))
    }

    /// Select with full detail, optionally restricting the pool by tags.
    pub fn select<'c>(
        &self,
        context: &UserContext,
        mindblock: &MindblockState,
        catalog: &'c Catalog,
        filter_tags: Option<&[String]>,
    ) -> Result<Selection<'c>, SelectionError> {
        let pool_size = catalog.get_candidates(filter_tags).len();
        let span = selection_span!(context.user_id, pool_size);
        let _guard = span.enter();

        let (ranked, relaxation) = self.rank(context, mindblock, catalog, filter_tags)?;
        let best = ranked
            .into_iter()
            .next()
            .ok_or_else(|| SelectionError::NoCandidate {
                reason: "no eligible candidate".to_string(),
            })?;

        tracing::info!(
            cue_id = %best.cue.id,
            weight = best.weight,
            relaxation = ?relaxation,
            "cue selected"
        );

        Ok(Selection {
            cue: best.cue,
            weight: best.weight,
            breakdown: best.breakdown,
            relaxation,
            pool_size,
        })
    }

    /// `select_next` restricted to cues sharing at least one of `tags`.
    pub fn select_next_filtered<'c>(
        &self,
        context: &UserContext,
        mindblock: &MindblockState,
        catalog: &'c Catalog,
        tags: &[String],
    ) -> Result<&'c CueDefinition, SelectionError> {
        self.select(context, mindblock, catalog, Some(tags))
            .map(|s| s.cue)
    }
}

impl SelectionStrategy for Selector {
    fn select_next<'c>(
        &self,
        context: &UserContext,
        mindblock: &MindblockState,
        catalog: &'c Catalog,
    ) -> Result<&'c CueDefinition, SelectionError> {
        self.select(context, mindblock, catalog, None).map(|s| s.cue)
    }
}

/// Select with default weights and no jitter.
pub fn select_next<'c>(
    context: &UserContext,
    mindblock: &MindblockState,
    catalog: &'c Catalog,
) -> Result<&'c CueDefinition, SelectionError> {
    Selector::default().select_next(context, mindblock, catalog)
}
