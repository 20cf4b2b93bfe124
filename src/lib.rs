// ============================================================================
// ORDER ADMIN DASHBOARD - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación con CMS / navegador
// - State: State Management con Rc<RefCell>
// - Models: Estructuras del CMS
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::utils::constants::ROOT_ELEMENT_ID;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Order Admin Dashboard - Rust Puro + MVVM");

    // Página sin contenedor (p. ej. runner de wasm-bindgen-test): no montar nada
    if dom::get_element_by_id(ROOT_ELEMENT_ID).is_none() {
        log::warn!("⚠️ [APP] No existe #{}, dashboard no montado", ROOT_ELEMENT_ID);
        return Ok(());
    }

    let app = App::new()?;

    // Sin sesión ya se redirigió al login: no se renderiza ni se consulta el CMS
    if !app.check_session() {
        return Ok(());
    }

    app.render()?;
    app.start_loading();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        match app_cell.borrow().as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
