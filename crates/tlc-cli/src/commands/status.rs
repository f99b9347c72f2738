use std::path::Path;

use tlc_core::SaveStore;

pub fn run(save: &Path) -> Result<(), String> {
    let store = SaveStore::new(save);
    if !store.exists() {
        println!("  No hay partida guardada en {}.", save.display());
        return Ok(());
    }

    let state = store.try_load().map_err(|e| e.to_string())?;
    println!("{}", super::session_table(&state));
    Ok(())
}
