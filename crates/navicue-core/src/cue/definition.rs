use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use ts_rs::TS;

use super::layout::{CueContainer, CueFormat};
use super::response_kind::ResponseKind;
use crate::constants::{MAX_OPTIONS_PER_CUE, MAX_STAGE_DURATION_MS, MAX_TAGS_PER_CUE};
use crate::errors::CatalogError;

/// One selectable option of a select/multiselect cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CueOption {
    /// Stable value recorded in outcomes.
    pub value: String,
    /// Copy shown by the renderer.
    pub display: String,
}

impl CueOption {
    pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
        }
    }
}

/// Content-defined timing overrides. `None` falls back to the lifecycle config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CueTiming {
    pub arriving_ms: Option<u64>,
    pub present_ms: Option<u64>,
    /// Duration of a `timer` or `sitWithIt` cue.
    pub duration_ms: Option<u64>,
    /// Press duration needed to complete a `hold` cue.
    pub hold_target_ms: Option<u64>,
}

/// Immutable content descriptor for one cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CueDefinition {
    pub id: String,
    pub format: CueFormat,
    pub container: CueContainer,
    pub response_kind: ResponseKind,
    /// Present only for select/multiselect cues, in display order.
    #[serde(default)]
    pub options: Vec<CueOption>,
    /// Thematic and mechanism labels.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Validation threshold for text responses.
    #[serde(default)]
    pub min_response_length: Option<usize>,
    /// Whether the cue shows a framing/instructions stage before `active`.
    #[serde(default = "default_has_framing")]
    pub has_framing: bool,
    #[serde(default)]
    pub timing: CueTiming,
}

fn default_has_framing() -> bool {
    true
}

impl CueDefinition {
    /// Create a cue with no options, tags, or timing overrides.
    pub fn new(
        id: impl Into<String>,
        format: CueFormat,
        container: CueContainer,
        response_kind: ResponseKind,
    ) -> Self {
        Self {
            id: id.into(),
            format,
            container,
            response_kind,
            options: Vec::new(),
            tags: BTreeSet::new(),
            min_response_length: None,
            has_framing: true,
            timing: CueTiming::default(),
        }
    }

    pub fn with_options(mut self, options: Vec<CueOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_response_length(mut self, min: usize) -> Self {
        self.min_response_length = Some(min);
        self
    }

    pub fn with_framing(mut self, has_framing: bool) -> Self {
        self.has_framing = has_framing;
        self
    }

    pub fn with_timing(mut self, timing: CueTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Look up an option by its value.
    pub fn option(&self, value: &str) -> Option<&CueOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Position of an option value in display order.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    /// Number of tags this cue shares with `other`.
    pub fn tag_overlap<'a, I>(&self, other: I) -> usize
    where
        I: IntoIterator<Item = &'a String>,
    {
        other.into_iter().filter(|t| self.tags.contains(*t)).count()
    }

    /// Check the structural invariants of a single definition.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }

        let needs_options = self.response_kind.requires_options();
        if needs_options && self.options.is_empty() {
            return Err(CatalogError::OptionsMismatch {
                cue_id: self.id.clone(),
                response_kind: self.response_kind.to_string(),
                reason: "requires at least one option".to_string(),
            });
        }
        if !needs_options && !self.options.is_empty() {
            return Err(CatalogError::OptionsMismatch {
                cue_id: self.id.clone(),
                response_kind: self.response_kind.to_string(),
                reason: "must not carry options".to_string(),
            });
        }
        if self.options.len() > MAX_OPTIONS_PER_CUE {
            return Err(CatalogError::TooManyOptions {
                cue_id: self.id.clone(),
                count: self.options.len(),
                limit: MAX_OPTIONS_PER_CUE,
            });
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.value.as_str()) {
                return Err(CatalogError::DuplicateOption {
                    cue_id: self.id.clone(),
                    value: option.value.clone(),
                });
            }
        }

        if self.tags.len() > MAX_TAGS_PER_CUE {
            return Err(CatalogError::TooManyTags {
                cue_id: self.id.clone(),
                count: self.tags.len(),
                limit: MAX_TAGS_PER_CUE,
            });
        }

        if self.min_response_length.is_some() && self.response_kind != ResponseKind::Text {
            return Err(CatalogError::MinLengthOnNonText {
                cue_id: self.id.clone(),
            });
        }

        self.validate_timing()
    }

    /// Every override must fit within `MAX_STAGE_DURATION_MS`; a hold target
    /// must also be positive.
    fn validate_timing(&self) -> Result<(), CatalogError> {
        let fields = [
            ("arriving_ms", self.timing.arriving_ms),
            ("present_ms", self.timing.present_ms),
            ("duration_ms", self.timing.duration_ms),
            ("hold_target_ms", self.timing.hold_target_ms),
        ];
        for (field, value) in fields {
            let Some(value) = value else { continue };
            if value > MAX_STAGE_DURATION_MS {
                return Err(CatalogError::InvalidTiming {
                    cue_id: self.id.clone(),
                    field: field.to_string(),
                    reason: format!("{value}ms exceeds {MAX_STAGE_DURATION_MS}ms"),
                });
            }
        }
        if self.timing.hold_target_ms == Some(0) {
            return Err(CatalogError::InvalidTiming {
                cue_id: self.id.clone(),
                field: "hold_target_ms".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
