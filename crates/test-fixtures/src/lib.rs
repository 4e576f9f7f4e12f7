//! Test fixtures for NaviCue: catalog JSON files and cue builders shared by
//! tests across crates.

use navicue_core::{CueContainer, CueDefinition, CueFormat, CueOption, CueTiming, ResponseKind};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of this crate, where fixture files live.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Raw text of the sample catalog, one cue per response kind plus extras.
pub fn sample_catalog_json() -> String {
    let path = fixture_path("catalogs/sample.json");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Deserialized sample catalog definitions.
pub fn sample_cues() -> Vec<CueDefinition> {
    load_fixture("catalogs/sample.json")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A valid cue of the given kind. Select kinds get options `x` and `y`.
pub fn cue(id: &str, kind: ResponseKind) -> CueDefinition {
    let base = CueDefinition::new(id, CueFormat::Card, CueContainer::Centered, kind);
    if kind.requires_options() {
        base.with_options(vec![CueOption::new("x", "X"), CueOption::new("y", "Y")])
    } else {
        base
    }
}

/// A text cue with a minimum response length.
pub fn text_cue(id: &str, min_length: usize) -> CueDefinition {
    cue(id, ResponseKind::Text).with_min_response_length(min_length)
}

/// A select or multiselect cue with the given option values.
pub fn options_cue(id: &str, kind: ResponseKind, values: &[&str]) -> CueDefinition {
    cue(id, kind).with_options(
        values
            .iter()
            .map(|v| CueOption::new(*v, v.to_uppercase()))
            .collect(),
    )
}

/// A hold cue with an explicit target duration.
pub fn hold_cue(id: &str, target_ms: u64) -> CueDefinition {
    cue(id, ResponseKind::Hold).with_timing(CueTiming {
        hold_target_ms: Some(target_ms),
        ..CueTiming::default()
    })
}

/// A timer or sit-with-it cue with an explicit duration.
pub fn timed_cue(id: &str, kind: ResponseKind, duration_ms: u64) -> CueDefinition {
    cue(id, kind).with_timing(CueTiming {
        duration_ms: Some(duration_ms),
        ..CueTiming::default()
    })
}
