use std::io::{self, BufRead, Write};
use std::thread;

use colored::Colorize;
use tlc_core::{GameConfig, ScenarioId};
use tlc_session::{Cue, Event, GameSession, Outcome, Screen, Soundboard, text};

const QUIT: &str = ":q";
const STATUS: &str = ":estado";

/// Rings the terminal bell for the victory chime. There is no ambient sound.
struct TerminalBell;

impl Soundboard for TerminalBell {
    fn play(&mut self, cue: Cue, _looped: bool) {
        if cue == Cue::Bells {
            print!("\x07");
            let _ = io::stdout().flush();
        }
    }

    fn stop_all(&mut self) {}
}

pub fn run(config: GameConfig) -> Result<(), String> {
    let mut session = GameSession::new(config).with_soundboard(TerminalBell);
    show_menu(&session);
    println!("  Escribe '{QUIT}' para salir en cualquier momento.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input == QUIT {
            break;
        }

        match step(&mut session, input) {
            Ok(events) => show(&mut session, events)?,
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    session.close();
    println!("  Hasta pronto.");
    Ok(())
}

/// Feed one line of input to whatever the current screen expects.
fn step(session: &mut GameSession, input: &str) -> Result<Vec<Event>, String> {
    let result = match session.screen() {
        Screen::Welcome => match input {
            "1" => session.new_game(),
            "2" if session.can_continue() => session.continue_game(),
            _ => return Err("Opción no válida.".into()),
        },
        Screen::NamePrompt => session.submit_name(input),
        Screen::ScenarioSelect => {
            let id: ScenarioId = input.parse().map_err(|_| "Elige 1, 2 o 3.".to_string())?;
            session.select_scenario(id)
        }
        Screen::InScenario(_) if input == STATUS => {
            if let Some(record) = session.current_record() {
                println!("{}\n", super::record_summary(&record));
            }
            return Ok(Vec::new());
        }
        Screen::InScenario(_) => session.submit_command(input),
        Screen::Outcome(_) => session.acknowledge_outcome(),
    };
    result.map_err(|e| e.to_string())
}

/// Render events, then the menu of the screen they lead to.
fn show(session: &mut GameSession, events: Vec<Event>) -> Result<(), String> {
    let mut return_after = None;
    for event in &events {
        render(event);
        if let Event::Victory { return_after: delay, .. } = event {
            return_after = Some(*delay);
        }
    }
    if events.iter().any(|e| matches!(e, Event::ScreenChanged(_))) {
        show_menu(session);
    }

    if let Some(delay) = return_after {
        thread::sleep(delay);
        let events = session.acknowledge_outcome().map_err(|e| e.to_string())?;
        show(session, events)?;
    }
    Ok(())
}

fn render(event: &Event) {
    match event {
        Event::ScreenChanged(_) => {}
        Event::Line(line) => println!("{line}\n"),
        Event::Warning { title, message } => {
            println!("{} {}\n", format!("{title}:").yellow().bold(), message.yellow());
        }
        Event::Victory { message, .. } => println!("{}\n", message.green().bold()),
        Event::Defeat { reason } => {
            println!("{}", text::GLITCH.red());
            println!("{}", text::ERROR_FLASH.red().bold());
            println!("{}", reason.headline().bold());
            println!("{}\n", text::GAME_OVER.red().bold());
        }
    }
}

fn show_menu(session: &GameSession) {
    match session.screen() {
        Screen::Welcome => {
            println!("  {}", text::TITLE.bold());
            println!("  {}\n", text::SUBTITLE.dimmed());
            println!("  1) Nuevo juego");
            if session.can_continue() {
                println!("  2) Continuar");
            }
            println!("\n  {}\n", text::FOOTER.dimmed());
        }
        Screen::ScenarioSelect => {
            for &id in ScenarioId::all() {
                println!(
                    "  {}) {} [{}]",
                    id.number(),
                    id.title().bold(),
                    id.difficulty()
                );
                println!("     {}", id.blurb());
            }
            println!();
        }
        Screen::InScenario(_) => {
            println!("  ('{STATUS}' muestra tu progreso)\n");
        }
        Screen::Outcome(Outcome::Lose(..)) => {
            println!("  1) {}\n", text::BACK_TO_START);
        }
        Screen::NamePrompt | Screen::Outcome(Outcome::Win(_)) => {}
    }
}
