use std::path::Path;

use tlc_core::SaveStore;

pub fn run(save: &Path) -> Result<(), String> {
    let store = SaveStore::new(save);
    if !store.exists() {
        println!("  No hay partida guardada en {}.", save.display());
        return Ok(());
    }

    store.delete().map_err(|e| e.to_string())?;
    println!("  Partida borrada: {}", save.display());
    Ok(())
}
