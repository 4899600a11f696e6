use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for scene IDs.
///
/// Scene ids are authored strings ("start", "frontDoor", ...) but never
/// travel through the API as bare strings, so a choice pointing at a
/// misspelled id is caught by graph validation instead of a silent miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The designated entry scene of every story graph.
    pub fn entry() -> Self {
        Self::new("start")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The category of a terminal scene, used to select the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingType {
    Truth,
    Madness,
    Coward,
}

impl EndingType {
    /// Returns the tag string for this ending (e.g., "madness").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Truth => "truth",
            Self::Madness => "madness",
            Self::Coward => "coward",
        }
    }

    /// The epilogue line shown on the game-over screen.
    pub fn closing_message(&self) -> &'static str {
        match self {
            Self::Truth => "Descubriste la verdad, pero a un precio terrible.",
            Self::Madness => "Tu mente no pudo soportar los horrores que presenciaste.",
            Self::Coward => "Huiste, pero algunos horrores te siguen para siempre.",
        }
    }
}

/// Closing message for a finished session, including the fallback for
/// ending scenes that declare no type.
pub fn closing_message(ending: Option<EndingType>) -> &'static str {
    match ending {
        Some(ending) => ending.closing_message(),
        None => "Tu historia ha llegado a su fin.",
    }
}

/// A directed edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the player for this option.
    pub text: String,
    /// Target scene. Must exist in the graph (closed-graph invariant).
    pub next_scene: SceneId,
    /// Signed sanity effect applied when the choice is taken.
    #[serde(default)]
    pub sanity_change: i32,
}

/// A node in the narrative graph: one point in the story, with a title,
/// description, and outgoing choices (or none, if terminal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub title: String,
    pub description: String,
    pub choices: Vec<Choice>,
    /// Terminal marker. Ending scenes have no outgoing choices.
    #[serde(default)]
    pub is_ending: bool,
    #[serde(default)]
    pub ending_type: Option<EndingType>,
}
