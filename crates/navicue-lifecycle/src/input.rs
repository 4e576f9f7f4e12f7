use serde::{Deserialize, Serialize};

/// Renderer-originated input. Only meaningful while the controller is `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// Append typed characters to a text response.
    TypeText(String),
    Backspace,
    /// Submit a text or multiselect response.
    Submit,
    /// Pick one option of a select cue.
    Choose(String),
    /// Flip one option of a multiselect cue.
    Toggle(String),
    /// Start pressing a hold cue.
    Press,
    /// Stop pressing a hold cue.
    Release,
    /// Leave a finished timer cue.
    Continue,
    /// "Continue later".
    Defer,
    Skip,
}

/// Whether an input changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAck {
    Accepted,
    /// Outside `active`, not applicable to the cue's response kind, or the
    /// response was already final. Never queued.
    Ignored,
}
