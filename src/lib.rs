//! Casa Oscura — a deterministic branching-narrative engine for a
//! psychological horror game.
//!
//! An immutable scene graph, a caller-owned game state with sanity
//! tracking and choice history, and a pure transition engine. The UI
//! layer that renders scenes and collects choices lives outside this
//! crate and calls in through `core::engine::apply_choice`.

pub mod content;
pub mod core;
pub mod schema;
