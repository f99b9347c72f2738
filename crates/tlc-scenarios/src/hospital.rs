//! Scenario 2: sneaking out of a hospital.
//!
//! The player starts on the third of twelve floors and has to reach the
//! emergency exit on the ground floor. Stairs move one floor at a time, the
//! elevator is unreliable, and opening an occupied room ends the game.

use tlc_core::state::hospital::FLOOR_COUNT;
use tlc_core::{Dice, HospitalState, ScenarioId};
use tracing::{debug, info};

use crate::rules::Rule;
use crate::scenario::Scenario;
use crate::turn::{LoseReason, Narration, Signal};

/// Chance the elevator is running.
pub const ELEVATOR_CHANCE: f64 = 0.6;

/// The hospital scenario.
#[derive(Debug, Clone, Copy)]
pub struct Hospital;

const RULES: &[Rule<HospitalState>] = &[
    Rule {
        action: "stairs",
        keywords: &["ir a", "subir", "bajar"],
        handler: take_stairs,
    },
    Rule {
        action: "elevator",
        keywords: &["elevador"],
        handler: take_elevator,
    },
    Rule {
        action: "enter room",
        keywords: &["entrar r", "entrar a r", "abrir r"],
        handler: enter_room,
    },
    Rule {
        action: "search",
        keywords: &["buscar", "revisar", "inspeccionar"],
        handler: search,
    },
    Rule {
        action: "exit",
        keywords: &["salir", "urgencias", "salida"],
        handler: exit,
    },
];

impl Scenario for Hospital {
    type State = HospitalState;

    const ID: ScenarioId = ScenarioId::Hospital;

    const FALLBACK: &'static str =
        "Acciones posibles: subir, bajar, elevador, entrar R1..R4, buscar, salir/urgencias.";

    fn rules() -> &'static [Rule<HospitalState>] {
        RULES
    }

    fn intro(state: &HospitalState) -> String {
        format!(
            "Estás en el pasillo del piso {} de un hospital de {FLOOR_COUNT} pisos. Hay puertas \
             a las habitaciones etiquetadas R1..R4, un elevador y escaleras. Ten cuidado: si \
             entras a una habitación que está ocupada, serás descubierto y perderás.",
            state.floor
        )
    }
}

/// The room id named in a command: the first word that is `r` followed by
/// digits, upper-cased.
pub fn room_token(cmd: &str) -> Option<String> {
    cmd.split_whitespace().find_map(|word| {
        let digits = word.strip_prefix(['r', 'R'])?;
        (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
            .then(|| word.to_uppercase())
    })
}

fn take_stairs(cmd: &str, s: &mut HospitalState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if cmd.contains("subir") || cmd.contains("ir arriba") {
        if s.floor >= FLOOR_COUNT {
            out.say("Ya estás en el piso más alto.");
        } else {
            s.floor += 1;
            out.say(format!("Subes al piso {}.", s.floor));
        }
    } else if cmd.contains("bajar") || cmd.contains("ir abajo") {
        if s.floor <= 1 {
            out.say("Ya estás en el piso 1.");
        } else {
            s.floor -= 1;
            out.say(format!("Bajas al piso {}.", s.floor));
        }
    } else {
        out.say("Especifica subir o bajar.");
    }
    Signal::Continue
}

fn take_elevator(_: &str, s: &mut HospitalState, dice: &mut dyn Dice, out: &mut Narration) -> Signal {
    if dice.chance(ELEVATOR_CHANCE) {
        let dest = 1 + dice.below(u32::from(FLOOR_COUNT));
        s.floor = u8::try_from(dest).unwrap_or(FLOOR_COUNT);
        debug!(floor = s.floor, "elevator ride");
        out.say(format!("El elevador funciona. Sales en el piso {}.", s.floor));
    } else {
        out.say("El elevador está fuera de servicio en este momento.");
    }
    Signal::Continue
}

fn enter_room(cmd: &str, s: &mut HospitalState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    let Some(id) = room_token(cmd) else {
        out.say("Indica la habitación (ej: entrar R2).");
        return Signal::Continue;
    };
    let floor = s.floor;
    let Some(room) = s.room(floor, &id).copied() else {
        out.say("No existe esa habitación en este piso.");
        return Signal::Continue;
    };

    if room.occupied {
        info!(floor, room = %id, "walked into occupied room");
        out.say(format!("Entras a {id} y hay alguien dentro. Te han descubierto."));
        return Signal::Lose(LoseReason::Discovered);
    }

    out.say(format!("Entras a {id}. La habitación está vacía."));
    if room.has_tool {
        if let Some(r) = s.room_mut(floor, &id) {
            r.has_tool = false;
        }
        s.has_key = true;
        out.say(
            "Encuentras una herramienta (destornillador/manija). Podría servir para abrir \
             puertas cerradas.",
        );
    }
    Signal::Continue
}

fn search(_: &str, _: &mut HospitalState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    out.say(
        "Revisas el pasillo: hay puertas, una salida de emergencia en el piso 1 y un acceso \
         a urgencias en la planta baja.",
    );
    Signal::Continue
}

fn exit(_: &str, s: &mut HospitalState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.floor <= 1 {
        out.say("Encuentras la salida de urgencias. ¡Has salido del hospital!");
        s.escaped = true;
        Signal::Win
    } else {
        out.say("La entrada de urgencias está en la planta baja. Debes descender primero.");
        Signal::Continue
    }
}
