/// Transition engine — computes the next game state from a chosen edge.
use tracing::error;

use crate::core::graph::SceneGraph;
use crate::schema::scene::Choice;
use crate::schema::state::{GameState, SANITY_MAX, SANITY_MIN};

/// Apply a player's choice to a session state and return the next state.
///
/// Deterministic, no I/O, no randomness: the result depends only on the
/// arguments. The input state is never mutated; the caller replaces its
/// copy with the returned value, so a transition is atomic as far as any
/// renderer can observe.
///
/// If the choice targets a scene that is not in the graph, the transition
/// is refused: the error is reported and the state comes back unchanged.
/// Graphs that passed load-time validation never hit this path.
pub fn apply_choice(graph: &SceneGraph, state: &GameState, choice: &Choice) -> GameState {
    let Some(scene) = graph.lookup(&choice.next_scene) else {
        error!(
            scene = %choice.next_scene,
            choice = %choice.text,
            "choice targets a scene that does not exist; refusing transition"
        );
        return state.clone();
    };

    let mut choices = state.choices.clone();
    choices.push(choice.text.clone());

    GameState {
        current_scene: scene.id.clone(),
        sanity: (state.sanity + choice.sanity_change).clamp(SANITY_MIN, SANITY_MAX),
        choices,
        ended: scene.is_ending,
        ending: scene.ending_type,
        ..state.clone()
    }
}
