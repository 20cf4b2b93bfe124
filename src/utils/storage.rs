use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer un valor crudo (sin JSON) de localStorage
pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

/// Flag booleano guardado como "true"/"false"
pub fn load_flag(key: &str) -> bool {
    is_true(load_raw(key).as_deref())
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}
