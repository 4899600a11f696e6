/// Scene graph container — types, RON loading, and load-time validation.
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::schema::scene::{Choice, EndingType, Scene, SceneId};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("duplicate scene id '{0}'")]
    DuplicateId(SceneId),
    #[error("scene '{scene}': choice '{choice}' targets unknown scene '{target}'")]
    UnknownTarget {
        scene: SceneId,
        choice: String,
        target: SceneId,
    },
    #[error("entry scene '{0}' is missing from the graph")]
    MissingEntry(SceneId),
    #[error("ending scene '{0}' has outgoing choices")]
    EndingHasChoices(SceneId),
    #[error("scene '{0}' is not an ending but has no choices")]
    NoChoices(SceneId),
}

/// An immutable mapping from scene id to scene, validated at construction.
///
/// Built once at process start and never mutated afterwards; shared reads
/// from any number of sessions are safe without synchronization. Cycles are
/// allowed — the graph need not be a DAG.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    scenes: FxHashMap<SceneId, Scene>,
    entry: SceneId,
}

// RON deserialization helpers — the authored format keys scenes by id and
// omits the id inside the record, so intermediate structs bridge the shapes.

#[derive(Debug, Deserialize)]
#[serde(rename = "Scene")]
struct RonScene {
    title: String,
    description: String,
    #[serde(default)]
    choices: Vec<RonChoice>,
    #[serde(default)]
    is_ending: bool,
    #[serde(default)]
    ending_type: Option<EndingType>,
}

#[derive(Debug, Deserialize)]
struct RonChoice {
    text: String,
    next_scene: String,
    #[serde(default)]
    sanity_change: i32,
}

impl SceneGraph {
    /// Build and validate a graph from already-constructed scenes.
    pub fn from_scenes(scenes: Vec<Scene>) -> Result<Self, GraphError> {
        let mut map = FxHashMap::default();
        for scene in scenes {
            if map.contains_key(&scene.id) {
                return Err(GraphError::DuplicateId(scene.id));
            }
            map.insert(scene.id.clone(), scene);
        }
        Self::validate(&map)?;
        Ok(Self {
            scenes: map,
            entry: SceneId::entry(),
        })
    }

    /// Load a scene graph from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, GraphError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a scene graph from a RON string.
    pub fn parse_ron(input: &str) -> Result<Self, GraphError> {
        let raw: FxHashMap<String, RonScene> = ron::from_str(input)?;
        let mut scenes = Vec::with_capacity(raw.len());

        for (id, ron_scene) in raw {
            let choices = ron_scene
                .choices
                .into_iter()
                .map(|c| Choice {
                    text: c.text,
                    next_scene: SceneId::new(c.next_scene),
                    sanity_change: c.sanity_change,
                })
                .collect();
            scenes.push(Scene {
                id: SceneId::new(id),
                title: ron_scene.title,
                description: ron_scene.description,
                choices,
                is_ending: ron_scene.is_ending,
                ending_type: ron_scene.ending_type,
            });
        }

        Self::from_scenes(scenes)
    }

    /// Resolve a scene id. Read-only; `None` means the content references a
    /// scene that was never authored, which validation rejects at load time.
    pub fn lookup(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// The designated entry scene id.
    pub fn entry(&self) -> &SceneId {
        &self.entry
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Rejects graphs that violate the content invariants: every choice
    /// target must exist (closed graph), the entry scene must be present,
    /// ending scenes must be terminal, and non-ending scenes must offer at
    /// least one choice.
    fn validate(scenes: &FxHashMap<SceneId, Scene>) -> Result<(), GraphError> {
        let entry = SceneId::entry();
        if !scenes.contains_key(&entry) {
            return Err(GraphError::MissingEntry(entry));
        }

        for scene in scenes.values() {
            if scene.is_ending && !scene.choices.is_empty() {
                return Err(GraphError::EndingHasChoices(scene.id.clone()));
            }
            if !scene.is_ending && scene.choices.is_empty() {
                return Err(GraphError::NoChoices(scene.id.clone()));
            }
            for choice in &scene.choices {
                if !scenes.contains_key(&choice.next_scene) {
                    return Err(GraphError::UnknownTarget {
                        scene: scene.id.clone(),
                        choice: choice.text.clone(),
                        target: choice.next_scene.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "start": (
            title: "Inicio",
            description: "Una puerta.",
            choices: [
                (text: "Abrir", next_scene: "end", sanity_change: -5),
                (text: "Esperar", next_scene: "start"),
            ],
        ),
        "end": (
            title: "Fin",
            description: "Todo termina.",
            is_ending: true,
            ending_type: Some(truth),
        ),
    }"#;

    #[test]
    fn parse_minimal_graph() {
        let graph = SceneGraph::parse_ron(MINIMAL).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.entry(), &SceneId::new("start"));

        let start = graph.lookup(&SceneId::new("start")).unwrap();
        assert_eq!(start.title, "Inicio");
        assert_eq!(start.choices.len(), 2);
        assert_eq!(start.choices[0].sanity_change, -5);
        // Omitted sanity_change defaults to 0
        assert_eq!(start.choices[1].sanity_change, 0);

        let end = graph.lookup(&SceneId::new("end")).unwrap();
        assert!(end.is_ending);
        assert_eq!(end.ending_type, Some(EndingType::Truth));
        assert!(end.choices.is_empty());
    }

    #[test]
    fn self_loops_are_valid() {
        // "Esperar" points back at "start"; cycles are allowed.
        let graph = SceneGraph::parse_ron(MINIMAL).unwrap();
        let start = graph.lookup(&SceneId::new("start")).unwrap();
        assert_eq!(start.choices[1].next_scene, start.id);
    }

    #[test]
    fn unknown_target_rejected() {
        let input = r#"{
            "start": (
                title: "Inicio",
                description: "Una puerta.",
                choices: [(text: "Abrir", next_scene: "missing")],
            ),
        }"#;
        let err = SceneGraph::parse_ron(input).unwrap_err();
        assert!(matches!(err, GraphError::UnknownTarget { target, .. }
            if target == SceneId::new("missing")));
    }

    #[test]
    fn missing_entry_rejected() {
        let input = r#"{
            "lobby": (
                title: "Vestíbulo",
                description: "Oscuridad.",
                is_ending: true,
            ),
        }"#;
        let err = SceneGraph::parse_ron(input).unwrap_err();
        assert!(matches!(err, GraphError::MissingEntry(_)));
    }

    #[test]
    fn ending_with_choices_rejected() {
        let input = r#"{
            "start": (
                title: "Inicio",
                description: "Una puerta.",
                choices: [(text: "Abrir", next_scene: "start")],
                is_ending: true,
            ),
        }"#;
        let err = SceneGraph::parse_ron(input).unwrap_err();
        assert!(matches!(err, GraphError::EndingHasChoices(_)));
    }

    #[test]
    fn dead_end_rejected() {
        let input = r#"{
            "start": (
                title: "Inicio",
                description: "Sin salida.",
            ),
        }"#;
        let err = SceneGraph::parse_ron(input).unwrap_err();
        assert!(matches!(err, GraphError::NoChoices(_)));
    }

    #[test]
    fn duplicate_id_rejected() {
        let scene = |id: &str| Scene {
            id: SceneId::new(id),
            title: "Fin".to_string(),
            description: "Todo termina.".to_string(),
            choices: Vec::new(),
            is_ending: true,
            ending_type: None,
        };
        let mut start = scene("start");
        start.is_ending = false;
        start.choices.push(Choice {
            text: "Abrir".to_string(),
            next_scene: SceneId::new("end"),
            sanity_change: 0,
        });

        let err =
            SceneGraph::from_scenes(vec![start, scene("end"), scene("end")]).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateId(id) if id == SceneId::new("end")));
    }

    #[test]
    fn malformed_ron_surfaces_parse_error() {
        let err = SceneGraph::parse_ron("{ not valid ron").unwrap_err();
        assert!(matches!(err, GraphError::Ron(_)));
    }
}
