//! Progress record for the room scenario.

use serde::{Deserialize, Serialize};

/// What the player has discovered in the locked room.
///
/// Every flag only ever goes from `false` to `true` while the scenario runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomState {
    /// The small key under the bed has been picked up.
    pub found_key: bool,
    /// The space under the bed has been searched.
    pub bed_checked: bool,
    /// The curtains have been pulled open.
    pub curtains_open: bool,
    /// The window latch has been examined.
    pub window_checked: bool,
    /// The screwdriver from the drawer is in hand.
    pub has_screwdriver: bool,
    /// The player climbed out of the window.
    pub escaped: bool,
}

impl RoomState {
    /// Whether the player holds anything that can force the latch.
    ///
    /// The key alone counts.
    pub fn has_tool(&self) -> bool {
        self.has_screwdriver || self.found_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_untouched() {
        let s = RoomState::default();
        assert!(!s.found_key && !s.bed_checked && !s.curtains_open);
        assert!(!s.window_checked && !s.has_screwdriver && !s.escaped);
        assert!(!s.has_tool());
    }

    #[test]
    fn key_counts_as_tool() {
        let s = RoomState {
            found_key: true,
            ..RoomState::default()
        };
        assert!(s.has_tool());
    }

    #[test]
    fn missing_screwdriver_field_loads() {
        let json = r#"{"found_key": true, "bed_checked": true, "curtains_open": false,
            "window_checked": false, "escaped": false}"#;
        let s: RoomState = serde_json::from_str(json).unwrap();
        assert!(s.found_key);
        assert!(!s.has_screwdriver);
    }
}
