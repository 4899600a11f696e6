/// Walkthrough demo — a scripted descent through "La Casa Abandonada".
///
/// Front door, the photographs, and finally the truth.
///
/// Run with: cargo run --example walkthrough
use casa_oscura::content;
use casa_oscura::core::engine::apply_choice;
use casa_oscura::core::gauge::{GaugeSeverity, SanityLabel};
use casa_oscura::schema::scene::closing_message;
use casa_oscura::schema::state::GameState;

fn main() {
    let graph = content::haunted_house().expect("shipped story must validate");
    let mut state = GameState::initialize("Ana", "Escorpio");

    let route = [
        "Entrar por la puerta principal",
        "Examinar las fotografías",
        "Buscar más fotografías",
    ];

    for pick in route {
        let scene = graph
            .lookup(&state.current_scene)
            .expect("current scene always resolves");
        println!("== {} ==", scene.title);
        println!("{}\n", scene.description);

        let choice = scene
            .choices
            .iter()
            .find(|c| c.text == pick)
            .expect("scripted choice exists in the scene");
        println!("> {}\n", choice.text);

        state = apply_choice(&graph, &state, choice);
        println!(
            "Cordura: {}/100 ({}) [{}]\n",
            state.sanity,
            SanityLabel::from_sanity(state.sanity).text(),
            GaugeSeverity::from_sanity(state.sanity).css_class(),
        );

        if state.ended {
            break;
        }
    }

    let finale = graph
        .lookup(&state.current_scene)
        .expect("ending scene resolves");
    println!("== FINAL: {} ==", finale.title);
    println!("{}\n", finale.description);
    println!("{}\n", closing_message(state.ending));

    println!("Decisiones de {}:", state.player_name);
    for (i, text) in state.choices.iter().enumerate() {
        println!("  {}. {}", i + 1, text);
    }
}
