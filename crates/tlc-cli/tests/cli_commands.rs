//! Integration tests for the CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn save_in(dir: &TempDir) -> PathBuf {
    dir.path().join("savegame.json")
}

fn tlc(save: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tlc").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--save")
        .arg(save)
        .args(["--victory-delay-ms", "0"]);
    cmd
}

fn read_save(save: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(save).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn welcome_hides_continue_without_save() {
    let dir = TempDir::new().unwrap();
    tlc(&save_in(&dir))
        .write_stdin(":q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Last Code"))
        .stdout(predicate::str::contains("1) Nuevo juego"))
        .stdout(predicate::str::contains("2) Continuar").not());
}

#[test]
fn continue_refused_without_save() {
    let dir = TempDir::new().unwrap();
    tlc(&save_in(&dir))
        .write_stdin("2\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opción no válida."));
}

#[test]
fn blank_name_warns() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    tlc(&save)
        .write_stdin("1\n   \n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nombre requerido"))
        .stdout(predicate::str::contains(
            "Introduce un nombre o apodo para continuar.",
        ));
    assert!(!save.exists());
}

#[test]
fn name_leads_to_scenario_cards() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    tlc(&save)
        .write_stdin("1\nAna\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selecciona un nivel (Ana)"))
        .stdout(predicate::str::contains("Escenario 2: Hospital [Medio]"))
        .stdout(predicate::str::contains("Escenario 3: Bosque [Difícil]"));
    let doc = read_save(&save);
    assert_eq!(doc["player_name"], "Ana");
    assert_eq!(doc["scene_data"], serde_json::json!({}));
}

#[test]
fn unknown_scenario_choice() {
    let dir = TempDir::new().unwrap();
    tlc(&save_in(&dir))
        .write_stdin("1\nAna\n9\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elige 1, 2 o 3."));
}

#[test]
fn room_escape_returns_to_welcome() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    tlc(&save)
        .write_stdin("1\nAna\n1\nchecar debajo de la cama\nusar destornillador\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("llave pequeña"))
        .stdout(predicate::str::contains("¡Has escapado!"))
        .stdout(predicate::str::contains(
            "Felicidades Ana por completar el nivel",
        ))
        .stdout(predicate::str::contains("2) Continuar"));
    let doc = read_save(&save);
    assert_eq!(doc["player_name"], "Ana");
    assert!(doc["current_scenario"].is_null());
    assert_eq!(doc["scene_data"], serde_json::json!({}));
}

#[test]
fn unknown_command_gets_hint() {
    let dir = TempDir::new().unwrap();
    tlc(&save_in(&dir))
        .write_stdin("1\nAna\n1\nbailar\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entiendo esa acción"));
}

#[test]
fn progress_survives_restart() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    tlc(&save)
        .write_stdin("1\nAna\n3\ntomar linterna\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recoges la linterna"));
    assert_eq!(read_save(&save)["current_scenario"], "scenario3");

    tlc(&save)
        .write_stdin("2\n:estado\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Te adentras en un bosque"))
        .stdout(predicate::str::contains("linterna: sí"));
}

#[test]
fn quitting_after_defeat_forgets_the_scenario() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    fs::write(
        &save,
        r#"{"player_name": "Ana", "current_scenario": "scenario2",
            "scene_data": {"scenario2": {"floor": 3, "floors": {"3": {
                "R1": {"occupied": true, "has_tool": false},
                "R2": {"occupied": false, "has_tool": false}}}}}}"#,
    )
    .unwrap();

    tlc(&save)
        .write_stdin("2\n:estado\nentrar r1\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("puertas R1 R2"))
        .stdout(predicate::str::contains("Has sido descubierto"));
    let doc = read_save(&save);
    assert!(doc["current_scenario"].is_null());
    assert_eq!(doc["scene_data"], serde_json::json!({}));

    tlc(&save)
        .write_stdin("2\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selecciona un nivel (Ana)"));
}

#[test]
fn new_game_discards_save() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    tlc(&save).write_stdin("1\nAna\n3\n:q\n").assert().success();
    assert!(save.exists());

    tlc(&save).write_stdin("1\n:q\n").assert().success();
    assert!(!save.exists());
}

#[test]
fn eof_ends_session() {
    let dir = TempDir::new().unwrap();
    tlc(&save_in(&dir))
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hasta pronto."));
}

#[test]
fn seeded_hospital_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for dir in [&first, &second] {
        tlc(&save_in(dir))
            .args(["--seed", "42"])
            .write_stdin("1\nAna\n2\n:q\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("piso 3 de un hospital"));
    }
    assert_eq!(read_save(&save_in(&first)), read_save(&save_in(&second)));
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_without_save() {
    let dir = TempDir::new().unwrap();
    tlc(&save_in(&dir))
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay partida guardada"));
}

#[test]
fn status_shows_saved_game() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    fs::write(
        &save,
        r#"{"player_name": "Ana", "current_scene": "scenario1",
            "scene_data": {"scenario1": {"found_key": true}}}"#,
    )
    .unwrap();
    tlc(&save)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("Escenario 1: Habitación"))
        .stdout(predicate::str::contains("llave: sí"));
}

#[test]
fn status_fails_on_corrupt_save() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    fs::write(&save, "not json").unwrap();
    tlc(&save)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_deletes_save() {
    let dir = TempDir::new().unwrap();
    let save = save_in(&dir);
    fs::write(&save, r#"{"player_name": "Ana"}"#).unwrap();
    tlc(&save)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Partida borrada"));
    assert!(!save.exists());
}

#[test]
fn reset_without_save() {
    let dir = TempDir::new().unwrap();
    tlc(&save_in(&dir))
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay partida guardada"));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("tlc")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("reset"));
}
