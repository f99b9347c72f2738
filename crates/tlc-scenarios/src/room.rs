//! Scenario 1: a locked room in a storm.
//!
//! The key is under the bed, the drawer holds a screwdriver, and the window
//! latch gives way to either. Nothing here is random and nothing loses.

use tlc_core::{Dice, RoomState, ScenarioId};

use crate::rules::Rule;
use crate::scenario::Scenario;
use crate::turn::{Narration, Signal};

/// The room scenario.
#[derive(Debug, Clone, Copy)]
pub struct Room;

const RULES: &[Rule<RoomState>] = &[
    Rule {
        action: "check bed",
        keywords: &["bajo", "debajo", "cama"],
        handler: check_bed,
    },
    Rule {
        action: "open curtains",
        keywords: &["cortina", "mover"],
        handler: open_curtains,
    },
    Rule {
        action: "look at window",
        keywords: &["ventana", "mirar"],
        handler: look_at_window,
    },
    Rule {
        action: "open drawer",
        keywords: &["cajón", "abrir cajón"],
        handler: open_drawer,
    },
    Rule {
        action: "force latch",
        keywords: &["usar", "forzar", "destornillador"],
        handler: force_latch,
    },
];

impl Scenario for Room {
    type State = RoomState;

    const ID: ScenarioId = ScenarioId::Room;

    const FALLBACK: &'static str = "No entiendo esa acción exactamente. Intenta acciones como: \
        checar debajo de la cama, abrir cajón, mover cortinas, mirar por la ventana, \
        usar destornillador.";

    fn rules() -> &'static [Rule<RoomState>] {
        RULES
    }

    fn intro(_: &RoomState) -> String {
        "Despiertas en una habitación con ventanas empañadas. Afuera llueve y se escuchan \
         truenos. Hay una cama, una mesa pequeña con un cajón, unas cortinas y una ventana \
         con pestillo. ¿Qué deseas hacer? (Escribe acciones como: checar debajo de la cama, \
         mover cortinas, mirar por la ventana, abrir cajón)"
            .to_string()
    }
}

fn check_bed(_: &str, s: &mut RoomState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.bed_checked {
        out.say("Ya revisaste debajo de la cama, solo hay polvo.");
    } else {
        out.say(
            "Revisas debajo de la cama y encuentras una llave pequeña. (La llave podría servir).",
        );
        s.found_key = true;
        s.bed_checked = true;
    }
    Signal::Continue
}

fn open_curtains(_: &str, s: &mut RoomState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.curtains_open {
        out.say("Las cortinas ya están abiertas.");
    } else {
        out.say(
            "Abres las cortinas. Afuera sólo ves una calle vacía y la lluvia; \
             la ventana tiene un pestillo.",
        );
        s.curtains_open = true;
    }
    Signal::Continue
}

fn look_at_window(_: &str, s: &mut RoomState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    out.say(
        "Al mirar la ventana notas que el pestillo está oxidado pero se puede abrir \
         desde dentro con una herramienta.",
    );
    s.window_checked = true;
    Signal::Continue
}

fn open_drawer(_: &str, s: &mut RoomState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.found_key {
        out.say(
            "Abres el cajón usando la llave. Dentro hay un destornillador. \
             Puede servir para forzar el pestillo.",
        );
        s.has_screwdriver = true;
    } else {
        out.say("Intentas abrir el cajón pero está cerrado con un pequeño candado.");
    }
    Signal::Continue
}

// The key alone is enough to force the latch.
fn force_latch(_: &str, s: &mut RoomState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.has_tool() {
        out.say(
            "Usas la herramienta para forzar el pestillo. La ventana cede y puedes salir \
             por ella. ¡Has escapado!",
        );
        s.escaped = true;
        Signal::Win
    } else {
        out.say("No tienes herramientas para forzar el pestillo.");
        Signal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::Turn;
    use proptest::prelude::*;
    use tlc_core::ScriptedDice;

    fn run(input: &str, state: RoomState) -> Turn<RoomState> {
        Room::handle(input, state, &mut ScriptedDice::default())
    }

    #[test]
    fn bed_reveals_key_once() {
        let t = run("checar debajo de la cama", RoomState::default());
        assert!(t.state.found_key && t.state.bed_checked);
        assert!(t.mentions("llave pequeña"));

        let again = run("checar debajo de la cama", t.state.clone());
        assert_eq!(again.state, t.state);
        assert!(again.mentions("solo hay polvo"));
    }

    #[test]
    fn curtains_are_idempotent() {
        let t = run("mover cortinas", RoomState::default());
        assert!(t.state.curtains_open);
        let again = run("MOVER CORTINAS", t.state.clone());
        assert_eq!(again.state, t.state);
        assert_eq!(again.lines, vec!["Las cortinas ya están abiertas."]);
    }

    #[test]
    fn window_look_is_repeatable() {
        let t = run("mirar por la ventana", RoomState::default());
        assert!(t.state.window_checked);
        let again = run("mirar por la ventana", t.state.clone());
        assert_eq!(again.state, t.state);
        assert!(again.mentions("pestillo está oxidado"));
    }

    #[test]
    fn drawer_needs_key() {
        let locked = run("abrir cajón", RoomState::default());
        assert!(!locked.state.has_screwdriver);
        assert!(locked.mentions("candado"));

        let keyed = RoomState {
            found_key: true,
            bed_checked: true,
            ..RoomState::default()
        };
        let open = run("abrir cajón", keyed);
        assert!(open.state.has_screwdriver);
    }

    #[test]
    fn forcing_without_tool_continues() {
        let t = run("usar destornillador", RoomState::default());
        assert_eq!(t.signal, Signal::Continue);
        assert!(!t.state.escaped);
        assert!(t.mentions("No tienes herramientas"));
    }

    #[test]
    fn key_alone_forces_latch() {
        let s = run("checar debajo de la cama", RoomState::default()).state;
        let t = run("forzar ventana", s);
        // "forzar ventana" contains "ventana", which ranks above forcing.
        assert_eq!(t.signal, Signal::Continue);

        let t = run("forzar el pestillo", t.state);
        assert_eq!(t.signal, Signal::Win);
        assert!(t.state.escaped);
        assert!(!t.state.has_screwdriver);
    }

    #[test]
    fn full_walkthrough() {
        let mut s = RoomState::default();
        for cmd in ["mover cortinas", "mirar por la ventana", "debajo", "abrir cajón"] {
            let t = run(cmd, s);
            assert_eq!(t.signal, Signal::Continue);
            s = t.state;
        }
        assert!(s.has_screwdriver);
        let t = run("usar destornillador", s);
        assert_eq!(t.signal, Signal::Win);
    }

    #[test]
    fn unknown_command_gets_fallback() {
        let t = run("saltar", RoomState::default());
        assert_eq!(t.state, RoomState::default());
        assert_eq!(t.lines, vec![Room::FALLBACK]);
        assert_eq!(t.signal, Signal::Continue);
    }

    const COMMANDS: &[&str] = &[
        "checar debajo de la cama",
        "mover cortinas",
        "mirar por la ventana",
        "abrir cajón",
        "usar destornillador",
        "gritar",
    ];

    proptest! {
        #[test]
        fn flags_never_revert(cmds in proptest::collection::vec(0..COMMANDS.len(), 0..30)) {
            let mut s = RoomState::default();
            for i in cmds {
                let before = s.clone();
                let t = run(COMMANDS[i], s);
                s = t.state;
                prop_assert!(s.found_key >= before.found_key);
                prop_assert!(s.bed_checked >= before.bed_checked);
                prop_assert!(s.curtains_open >= before.curtains_open);
                prop_assert!(s.window_checked >= before.window_checked);
                prop_assert!(s.has_screwdriver >= before.has_screwdriver);
                prop_assert_eq!(t.signal == Signal::Win, s.escaped);
                if s.escaped {
                    break;
                }
            }
        }

        #[test]
        fn win_requires_a_tool(input in "\\PC{0,40}") {
            let t = run(&input, RoomState::default());
            prop_assert_ne!(t.signal, Signal::Win);
        }
    }
}
