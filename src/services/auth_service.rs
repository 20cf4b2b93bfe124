// ============================================================================
// AUTH SERVICE - Flag de sesión en localStorage + redirecciones
// ============================================================================
// No hay sesión en servidor: el login externo deja "isLoggedIn" = "true"
// ============================================================================

use crate::services::traits::{Navigator, SessionStore};
use crate::utils::constants::LOGGED_IN_KEY;
use crate::utils::storage::{load_flag, remove_from_storage};

/// Flag de sesión persistido en localStorage
#[derive(Clone, Debug)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new() -> Self {
        Self {
            key: LOGGED_IN_KEY.to_string(),
        }
    }
}

impl Default for LocalStorageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalStorageSession {
    fn is_logged_in(&self) -> bool {
        load_flag(&self.key)
    }

    fn clear_logged_in(&self) -> Result<(), String> {
        remove_from_storage(&self.key)?;
        log::info!("🔓 [AUTH] Flag '{}' eliminado de localStorage", self.key);
        Ok(())
    }
}

/// Navegación completa del documento (`window.location.href = ...`)
#[derive(Clone, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, path: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window")?;
        window
            .location()
            .set_href(path)
            .map_err(|e| format!("Error navegando a {}: {:?}", path, e))
    }
}

/// Gate de sesión: si no hay login, redirige y devuelve false
pub fn ensure_logged_in<S, N>(session: &S, navigator: &N, login_route: &str) -> bool
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if session.is_logged_in() {
        return true;
    }

    log::warn!("🔒 [AUTH] Sin sesión, redirigiendo a {}", login_route);
    if let Err(e) = navigator.navigate_to(login_route) {
        log::error!("❌ [AUTH] {}", e);
    }
    false
}
