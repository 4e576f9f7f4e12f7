//! Stable content digest of a catalog.
//!
//! The persistence layer stores the digest next to a user's mindblock state
//! and compares it on the next session to detect catalog changes.

use navicue_core::CueDefinition;

/// blake3 hex digest over the canonical JSON encoding of each definition, in order.
pub fn fingerprint(cues: &[CueDefinition]) -> String {
    let mut hasher = blake3::Hasher::new();
    for cue in cues {
        // Struct fields serialize in declaration order and tags are a BTreeSet,
        // so the encoding is canonical.
        match serde_json::to_vec(cue) {
            Ok(bytes) => {
                hasher.update(&(bytes.len() as u64).to_le_bytes());
                hasher.update(&bytes);
            }
            Err(e) => {
                tracing::warn!(cue_id = %cue.id, error = %e, "cue not serializable, hashing id only");
                hasher.update(cue.id.as_bytes());
            }
        }
    }
    hasher.finalize().to_hex().to_string()
}
