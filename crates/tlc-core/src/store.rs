//! JSON save file.
//!
//! The store fails open: [`SaveStore::load_or_default`] turns a missing or
//! corrupt file into an empty session and [`SaveStore::save_best_effort`]
//! logs write failures instead of returning them. Writes go to a sibling
//! temp file that is synced and renamed over the target.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::state::SessionState;

/// Reads and writes the session document at a fixed path.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// A store for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a save file exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the document, reporting why it could not be read.
    pub fn try_load(&self) -> CoreResult<SessionState> {
        let text = fs::read_to_string(&self.path).map_err(|e| CoreError::io(&self.path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Read the document, or an empty session if it is missing or unreadable.
    pub fn load_or_default(&self) -> SessionState {
        if !self.exists() {
            debug!(path = %self.path.display(), "no save file");
            return SessionState::default();
        }
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                warn!("ignoring unreadable save: {e}");
                SessionState::default()
            }
        }
    }

    /// Write the document atomically.
    pub fn try_save(&self, state: &SessionState) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
        }

        let tmp_path = self.tmp_path();
        let mut tmp = File::create(&tmp_path).map_err(|e| CoreError::io(&tmp_path, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| CoreError::io(&tmp_path, e))?;
        tmp.sync_all().map_err(|e| CoreError::io(&tmp_path, e))?;
        drop(tmp);

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CoreError::io(&self.path, e));
        }
        debug!(path = %self.path.display(), "saved");
        Ok(())
    }

    /// Write the document, logging and discarding any failure.
    ///
    /// Returns whether the write succeeded.
    pub fn save_best_effort(&self, state: &SessionState) -> bool {
        match self.try_save(state) {
            Ok(()) => true,
            Err(e) => {
                warn!("progress not saved: {e}");
                false
            }
        }
    }

    /// Delete the save file. A missing file is not an error.
    pub fn delete(&self) -> CoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::io(&self.path, e)),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioId;
    use crate::state::{ForestState, HospitalRoom, HospitalState, RoomState, ScenarioState};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SaveStore {
        SaveStore::new(dir.path().join("savegame.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.exists());
        assert_eq!(store.load_or_default(), SessionState::default());
        assert!(store.try_load().is_err());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.try_load(), Err(CoreError::Json(_))));
        assert_eq!(store.load_or_default(), SessionState::default());
    }

    #[test]
    fn round_trip_preserves_active_scenario() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut hospital = HospitalState::default();
        hospital.floors.entry(5).or_default().insert(
            "R3".to_string(),
            HospitalRoom {
                occupied: false,
                has_tool: true,
            },
        );
        hospital.floor = 5;
        let mut state = SessionState::for_player("Lucía");
        state.current_scenario = Some(ScenarioId::Hospital);
        state.scene_data.put(ScenarioState::Hospital(hospital.clone()));
        state.scene_data.put(ScenarioState::Forest(ForestState {
            pos: 4,
            water_bottles: 2,
            ..ForestState::default()
        }));

        assert!(store.save_best_effort(&state));
        let loaded = store.load_or_default();
        assert_eq!(loaded, state);
        assert_eq!(
            loaded.scene_data.get(ScenarioId::Hospital),
            Some(ScenarioState::Hospital(hospital))
        );
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.try_save(&SessionState::for_player("a")).unwrap();
        let mut second = SessionState::for_player("b");
        second.scene_data.room = Some(RoomState::default());
        store.try_save(&second).unwrap();

        assert_eq!(store.try_load().unwrap(), second);
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("savegame.json")]);
    }

    #[test]
    fn non_ascii_names_are_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.try_save(&SessionState::for_player("Begoña")).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("Begoña"));
    }

    #[test]
    fn save_into_missing_directory_creates_it() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path().join("nested/deeper/save.json"));
        assert!(store.save_best_effort(&SessionState::default()));
        assert!(store.exists());
    }

    #[test]
    fn unwritable_target_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // The target path is an existing directory, so the rename fails.
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();
        let store = SaveStore::new(&target);
        assert!(!store.save_best_effort(&SessionState::default()));
        assert!(!dir.path().join("occupied.tmp").exists());
        assert!(target.join("keep").exists());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.delete().unwrap();
        store.try_save(&SessionState::default()).unwrap();
        store.delete().unwrap();
        assert!(!store.exists());
    }
}
