use serde::Deserialize;

/// The in-game rules document from `/rules`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rules {
    /// The full rules text, markdown formatted.
    pub rules: String,
    pub revision: u32,
}
