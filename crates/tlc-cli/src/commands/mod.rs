pub mod play;
pub mod reset;
pub mod status;

use comfy_table::{ContentArrangement, Table};
use tlc_core::state::ScenarioState;
use tlc_core::state::hospital::FLOOR_COUNT;
use tlc_core::{ScenarioId, SessionState};

/// One row per field of the save document, plus one per scenario record.
fn session_table(state: &SessionState) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Campo", "Valor"]);

    table.add_row(vec![
        "Jugador".to_string(),
        state.player_name.clone().unwrap_or_else(|| "-".into()),
    ]);
    table.add_row(vec![
        "Escenario actual".to_string(),
        state
            .current_scenario
            .map_or_else(|| "-".into(), |id| id.title().to_string()),
    ]);
    for &id in ScenarioId::all() {
        if let Some(record) = state.scene_data.get(id) {
            table.add_row(vec![id.title().to_string(), record_summary(&record)]);
        }
    }
    table
}

/// Progress and inventory of a scenario record.
///
/// Hidden facts such as which hospital rooms are occupied are left out.
fn record_summary(record: &ScenarioState) -> String {
    let mut parts = match record {
        ScenarioState::Room(r) => vec![
            flag("llave", r.found_key),
            flag("destornillador", r.has_screwdriver),
            flag("cortinas abiertas", r.curtains_open),
            flag("ventana revisada", r.window_checked),
        ],
        ScenarioState::Hospital(h) => {
            let doors: Vec<&str> = h.current_rooms().map(|(id, _)| id).collect();
            let mut parts = vec![format!("piso {}/{FLOOR_COUNT}", h.floor)];
            if !doors.is_empty() {
                parts.push(format!("puertas {}", doors.join(" ")));
            }
            parts.push(flag("herramienta", h.has_key));
            parts
        }
        ScenarioState::Forest(f) => vec![
            format!("avance {}", f.pos),
            flag("linterna", f.has_light),
            format!("agua {}", f.water_bottles),
            flag("cuerda", f.rope),
        ],
    };
    if record.escaped() {
        parts.push("escapado".into());
    }
    parts.join(", ")
}

fn flag(name: &str, value: bool) -> String {
    format!("{name}: {}", if value { "sí" } else { "no" })
}
