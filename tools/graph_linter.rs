/// Graph Linter — validates scene-graph content files before they ship.
///
/// Usage: graph_linter <graph.ron> [more.ron ...]
use casa_oscura::core::graph::SceneGraph;
use casa_oscura::schema::scene::SceneId;
use std::collections::HashSet;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: graph_linter <graph.ron> [more.ron ...]");
        process::exit(0);
    }

    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;

    for path_arg in &args[1..] {
        let path = Path::new(path_arg);
        println!("=== {} ===", path_arg);

        let graph = match SceneGraph::load_from_ron(path) {
            Ok(graph) => graph,
            Err(e) => {
                println!("ERROR: {}", e);
                total_errors += 1;
                continue;
            }
        };

        let endings = graph.scenes().filter(|s| s.is_ending).count();
        println!(
            "Loaded {} scenes ({} endings, entry '{}')",
            graph.len(),
            endings,
            graph.entry()
        );

        let warnings = lint_graph(&graph);
        for warning in &warnings {
            println!("WARNING: {}", warning);
        }
        total_warnings += warnings.len();

        if warnings.is_empty() {
            println!("All checks passed!");
        }
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        total_errors, total_warnings
    );

    if total_errors > 0 {
        process::exit(1);
    }
}

/// Checks beyond the hard load-time invariants: unreachable scenes and
/// stories with no way to end.
fn lint_graph(graph: &SceneGraph) -> Vec<String> {
    let mut warnings = Vec::new();

    // Flood from the entry scene
    let mut reachable: HashSet<SceneId> = HashSet::new();
    let mut frontier = vec![graph.entry().clone()];
    while let Some(id) = frontier.pop() {
        if !reachable.insert(id.clone()) {
            continue;
        }
        if let Some(scene) = graph.lookup(&id) {
            for choice in &scene.choices {
                frontier.push(choice.next_scene.clone());
            }
        }
    }

    let mut unreachable: Vec<&SceneId> = graph
        .scenes()
        .map(|s| &s.id)
        .filter(|id| !reachable.contains(id))
        .collect();
    unreachable.sort_by_key(|id| id.as_str().to_string());
    for id in unreachable {
        warnings.push(format!("scene '{}' is unreachable from the entry", id));
    }

    if !graph
        .scenes()
        .any(|s| s.is_ending && reachable.contains(&s.id))
    {
        warnings.push("no ending scene is reachable from the entry".to_string());
    }

    let untyped: Vec<&SceneId> = graph
        .scenes()
        .filter(|s| s.is_ending && s.ending_type.is_none())
        .map(|s| &s.id)
        .collect();
    for id in untyped {
        warnings.push(format!(
            "ending scene '{}' has no ending type; the closing message falls back to the generic line",
            id
        ));
    }

    warnings
}
