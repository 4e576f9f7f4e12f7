//! # navicue-session
//!
//! Wires the engines together for one user: select a cue, run its lifecycle,
//! normalize the terminal state, and fold the outcome back into the user's
//! state. `SessionManager` holds many such sessions behind a concurrent map.

mod analytics;
mod manager;
mod session;

pub use analytics::SessionAnalytics;
pub use manager::SessionManager;
pub use session::CueSession;
