mod definition;
mod layout;
mod response_kind;

pub use definition::{CueDefinition, CueOption, CueTiming};
pub use layout::{CueContainer, CueFormat};
pub use response_kind::ResponseKind;
