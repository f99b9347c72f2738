//! Scenario 3: a night in the forest.
//!
//! Every step down the trail may turn up supplies or an animal. After
//! enough steps each further step has a chance of revealing the cabin.

use tlc_core::{Dice, ForestState, ScenarioId};
use tracing::{debug, info};

use crate::rules::Rule;
use crate::scenario::Scenario;
use crate::turn::{LoseReason, Narration, Signal};

/// Chance a step turns up a water bottle.
pub const WATER_CHANCE: f64 = 0.12;
/// Chance a step turns up a rope instead, drawn from the same roll as water.
pub const ROPE_CHANCE: f64 = 0.06;
/// Chance a step runs into an animal.
pub const ENCOUNTER_CHANCE: f64 = 0.15;
/// Chance the flashlight scares off a wolf or bear.
pub const LIGHT_ESCAPE_CHANCE: f64 = 0.7;
/// Chance the rope distracts a wolf or bear.
pub const ROPE_ESCAPE_CHANCE: f64 = 0.5;
/// Steps needed before the cabin can appear.
pub const CABIN_DISTANCE: u32 = 5;
/// Chance per step of spotting the cabin once close enough.
pub const CABIN_CHANCE: f64 = 0.35;

/// An animal met on the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animal {
    /// Can be held off with a light or a rope.
    Wolf,
    /// Scared off by a light or a rope, deadly otherwise.
    Snake,
    /// Same odds as the wolf.
    Bear,
}

impl Animal {
    /// Encounter table, drawn uniformly.
    pub const ALL: [Self; 3] = [Self::Wolf, Self::Snake, Self::Bear];

    /// Spanish name used in narration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wolf => "lobo",
            Self::Snake => "serpiente",
            Self::Bear => "oso",
        }
    }
}

/// The forest scenario.
#[derive(Debug, Clone, Copy)]
pub struct Forest;

const RULES: &[Rule<ForestState>] = &[
    Rule {
        action: "take flashlight",
        keywords: &["tomar linterna", "linterna"],
        handler: take_flashlight,
    },
    Rule {
        action: "advance",
        keywords: &["avanzar", "seguir", "ir"],
        handler: advance,
    },
    Rule {
        action: "search",
        keywords: &["buscar", "inspeccionar"],
        handler: search,
    },
    Rule {
        action: "use rope",
        keywords: &["usar cuerda"],
        handler: use_rope,
    },
    Rule {
        action: "drink",
        keywords: &["beber", "agua"],
        handler: drink,
    },
];

impl Scenario for Forest {
    type State = ForestState;

    const ID: ScenarioId = ScenarioId::Forest;

    const FALLBACK: &'static str =
        "Intenta acciones como: tomar linterna, avanzar, buscar, usar cuerda, beber.";

    fn rules() -> &'static [Rule<ForestState>] {
        RULES
    }

    fn intro(_: &ForestState) -> String {
        "Te adentras en un bosque al anochecer. Hay senderos, señales viejas, una linterna \
         tirada cerca, y sonidos de animales. Debes encontrar una cabaña para refugiarte. \
         Ten cuidado: algunos animales son agresivos."
            .to_string()
    }
}

fn take_flashlight(_: &str, s: &mut ForestState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.has_light {
        out.say("Ya tienes la linterna.");
    } else {
        out.say("Recoges la linterna. Puede ayudarte por la noche.");
        s.has_light = true;
    }
    Signal::Continue
}

fn advance(_: &str, s: &mut ForestState, dice: &mut dyn Dice, out: &mut Narration) -> Signal {
    s.pos += 1;
    out.say("Caminas por el sendero...");

    let find = dice.roll();
    if find < WATER_CHANCE {
        out.say("Encuentras una botella de agua.");
        s.water_bottles += 1;
    } else if find < WATER_CHANCE + ROPE_CHANCE {
        out.say("Encuentras una cuerda que podría servir.");
        s.rope = true;
    }

    if let Some(animal) = encounter(dice) {
        out.say(format!("¡Encuentras un {}! Es peligroso.", animal.name()));
        if !survive(animal, s, dice, out) {
            info!(animal = animal.name(), pos = s.pos, "killed on the trail");
            return Signal::Lose(LoseReason::Attacked);
        }
    }

    if s.pos >= CABIN_DISTANCE && dice.chance(CABIN_CHANCE) {
        out.say("Ves una cabaña entre los árboles. Has encontrado refugio. ¡Has sobrevivido!");
        s.escaped = true;
        return Signal::Win;
    }
    Signal::Continue
}

fn encounter(dice: &mut dyn Dice) -> Option<Animal> {
    if !dice.chance(ENCOUNTER_CHANCE) {
        return None;
    }
    let idx = dice.below(Animal::ALL.len() as u32) as usize;
    let animal = Animal::ALL[idx % Animal::ALL.len()];
    debug!(animal = animal.name(), "encounter");
    Some(animal)
}

/// Resolve an encounter. Escape rolls are only drawn for items actually held.
fn survive(animal: Animal, s: &ForestState, dice: &mut dyn Dice, out: &mut Narration) -> bool {
    match animal {
        Animal::Snake => {
            if s.rope || s.has_light {
                out.say("Logras espantar a la serpiente y sigues.");
                true
            } else {
                out.say("La serpiente te muerde. Pierdes consciencia.");
                false
            }
        }
        Animal::Wolf | Animal::Bear => {
            if s.has_light && dice.chance(LIGHT_ESCAPE_CHANCE) {
                out.say("Usas la linterna para asustar al animal y escapas.");
                true
            } else if s.rope && dice.chance(ROPE_ESCAPE_CHANCE) {
                out.say("Usas la cuerda para distraer y escapas.");
                true
            } else {
                out.say(format!("El {} te ataca.", animal.name()));
                false
            }
        }
    }
}

fn search(_: &str, _: &mut ForestState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    out.say("Exploras alrededor: hay senderos, señales viejas y zonas con animales. Mantén la calma.");
    Signal::Continue
}

fn use_rope(_: &str, s: &mut ForestState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.rope {
        out.say("Usas la cuerda para cruzar un precipicio o distraer animales si es necesario.");
    } else {
        out.say("No tienes cuerda.");
    }
    Signal::Continue
}

fn drink(_: &str, s: &mut ForestState, _: &mut dyn Dice, out: &mut Narration) -> Signal {
    if s.water_bottles > 0 {
        s.water_bottles -= 1;
        out.say("Bebes agua y recuperas energías.");
    } else {
        out.say("No tienes agua.");
    }
    Signal::Continue
}
