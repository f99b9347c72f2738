//! Fixed screen texts.

/// Game title.
pub const TITLE: &str = "The Last Code";
/// Subtitle under the title.
pub const SUBTITLE: &str = "Aventura interactiva";
/// Footer on the welcome screen.
pub const FOOTER: &str = "© The Last Code - Demo";
/// Asked on the name screen.
pub const NAME_PROMPT: &str = "Bienvenido... Introduce tu nombre o apodo";
/// Title of the blank-name warning.
pub const NAME_REQUIRED: &str = "Nombre requerido";
/// Body of the blank-name warning.
pub const NAME_REQUIRED_DETAIL: &str = "Introduce un nombre o apodo para continuar.";
/// First line of the defeat screen.
pub const GLITCH: &str = "El juego está fallando...";
/// Flashed during the defeat glitch.
pub const ERROR_FLASH: &str = "¡¡ ERROR !!";
/// Last line of the defeat screen.
pub const GAME_OVER: &str = "Game Over";
/// Label of the defeat acknowledgement.
pub const BACK_TO_START: &str = "Volver al inicio";

/// Header of the scenario selection screen.
pub fn select_header(player: &str) -> String {
    format!("Selecciona un nivel ({player})")
}

/// Message on the victory screen.
pub fn congratulations(player: &str) -> String {
    format!("Felicidades {player} por completar el nivel")
}
