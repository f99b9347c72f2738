//! Scenario identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the three playable scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Escape from a locked room during a storm.
    #[serde(rename = "scenario1")]
    Room,
    /// Sneak down and out of a twelve-storey hospital.
    #[serde(rename = "scenario2")]
    Hospital,
    /// Survive the night in a forest and find a cabin.
    #[serde(rename = "scenario3")]
    Forest,
}

impl ScenarioId {
    /// All scenarios in menu order.
    pub fn all() -> &'static [Self] {
        &[Self::Room, Self::Hospital, Self::Forest]
    }

    /// The identifier used in the save document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Room => "scenario1",
            Self::Hospital => "scenario2",
            Self::Forest => "scenario3",
        }
    }

    /// 1-based menu position.
    pub fn number(self) -> u8 {
        match self {
            Self::Room => 1,
            Self::Hospital => 2,
            Self::Forest => 3,
        }
    }

    /// Scenario for a 1-based menu position.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Room),
            2 => Some(Self::Hospital),
            3 => Some(Self::Forest),
            _ => None,
        }
    }

    /// Card title shown on the selection screen.
    pub fn title(self) -> &'static str {
        match self {
            Self::Room => "Escenario 1: Habitación",
            Self::Hospital => "Escenario 2: Hospital",
            Self::Forest => "Escenario 3: Bosque",
        }
    }

    /// Card difficulty label.
    pub fn difficulty(self) -> &'static str {
        match self {
            Self::Room => "Fácil",
            Self::Hospital => "Medio",
            Self::Forest => "Difícil",
        }
    }

    /// Card blurb.
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Room => {
                "Escapa de una habitación con lluvia y truenos. Escribe tus acciones."
            }
            Self::Hospital => {
                "Estás en el 3er piso de un hospital de 12. Evita ser descubierto."
            }
            Self::Forest => "Sobrevive al bosque con fauna salvaje y encuentra una cabaña.",
        }
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ScenarioId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scenario1" | "1" | "habitacion" | "habitación" => Ok(Self::Room),
            "scenario2" | "2" | "hospital" => Ok(Self::Hospital),
            "scenario3" | "3" | "bosque" => Ok(Self::Forest),
            other => Err(CoreError::UnknownScenario(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_save_keys() {
        let json = serde_json::to_string(&ScenarioId::Hospital).unwrap();
        assert_eq!(json, "\"scenario2\"");
        let id: ScenarioId = serde_json::from_str("\"scenario3\"").unwrap();
        assert_eq!(id, ScenarioId::Forest);
    }

    #[test]
    fn numbers_round_trip() {
        for id in ScenarioId::all() {
            assert_eq!(ScenarioId::from_number(id.number()), Some(*id));
        }
        assert_eq!(ScenarioId::from_number(4), None);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("Bosque".parse::<ScenarioId>().unwrap(), ScenarioId::Forest);
        assert_eq!("1".parse::<ScenarioId>().unwrap(), ScenarioId::Room);
        assert!("scenario9".parse::<ScenarioId>().is_err());
    }
}
