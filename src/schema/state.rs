use serde::{Deserialize, Serialize};

use super::scene::{EndingType, SceneId};

/// Lower bound of the sanity domain.
pub const SANITY_MIN: i32 = 0;
/// Upper bound of the sanity domain, and the value every session starts at.
pub const SANITY_MAX: i32 = 100;

/// The full record of one play session's progress through the scene graph.
///
/// The state is a plain value owned by the caller; the engine holds nothing.
/// One instance per session, no sharing across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub current_scene: SceneId,
    pub player_name: String,
    /// Free-form player classification tag (zodiac sign / archetype).
    pub zodiac_sign: String,
    /// Psychological stability, clamped to [SANITY_MIN, SANITY_MAX].
    pub sanity: i32,
    /// Texts of every choice taken, in order. Append-only.
    pub choices: Vec<String>,
    pub started: bool,
    pub ended: bool,
    /// Set when an ending scene is reached, `None` until then.
    pub ending: Option<EndingType>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_scene: SceneId::entry(),
            player_name: String::new(),
            zodiac_sign: String::new(),
            sanity: SANITY_MAX,
            choices: Vec::new(),
            started: false,
            ended: false,
            ending: None,
        }
    }
}

impl GameState {
    /// Fresh state for a new session: full sanity, empty history, positioned
    /// at the entry scene with the player's identity filled in.
    pub fn initialize(player_name: impl Into<String>, zodiac_sign: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            zodiac_sign: zodiac_sign.into(),
            started: true,
            ..Self::default()
        }
    }

    /// Discards all progress and returns the zero-value initial state.
    pub fn reset() -> Self {
        Self::default()
    }
}
