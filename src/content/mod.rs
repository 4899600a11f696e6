//! Shipped narrative content, embedded at compile time.

use crate::core::graph::{GraphError, SceneGraph};

const HAUNTED_HOUSE_RON: &str = include_str!("../../content_data/haunted_house.ron");

/// The complete "La Casa Abandonada" story graph, validated on load.
///
/// Callers typically build this once at startup and share it read-only
/// across every session.
pub fn haunted_house() -> Result<SceneGraph, GraphError> {
    SceneGraph::parse_ron(HAUNTED_HOUSE_RON)
}
