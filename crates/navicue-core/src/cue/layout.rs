use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visual format family of a cue. Opaque to the engine; read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum CueFormat {
    Card,
    Toast,
    Modal,
    TimerStrip,
    Fullscreen,
    Sheet,
}

/// Layout container the format is placed in. Opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum CueContainer {
    Centered,
    Stacked,
    Split,
    Overlay,
    Inline,
}
