// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, get_element_by_id, EventListeners};
use crate::services::ensure_logged_in;
use crate::state::AppState;
use crate::utils::constants::ROOT_ELEMENT_ID;
use crate::viewmodels::DashboardViewModel;
use crate::views::render_admin_dashboard;

/// Aplicación principal
pub struct App {
    vm: DashboardViewModel,
    root: Element,
    listeners: EventListeners,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Re-render en el próximo tick; varios cambios seguidos = un solo render
        let render_scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let render_scheduled = render_scheduled.clone();
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                render_scheduled.set(false);
                crate::rerender_app();
            }).forget();
        });

        Ok(Self::mount(root, DashboardViewModel::new(state)))
    }

    /// Montar sobre un contenedor ya existente
    pub fn mount(root: Element, vm: DashboardViewModel) -> Self {
        Self {
            vm,
            root,
            listeners: EventListeners::new(),
        }
    }

    /// Gate de sesión: false si se redirigió al login
    pub fn check_session(&self) -> bool {
        ensure_logged_in(
            self.vm.session().as_ref(),
            self.vm.navigator().as_ref(),
            self.vm.login_route(),
        )
    }

    /// Lanzar la carga única de pedidos
    pub fn start_loading(&self) {
        let vm = self.vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.load().await;
        });
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&self) -> Result<(), JsValue> {
        // Los handlers del render anterior mueren con sus elementos
        self.listeners.clear();
        clear_children(&self.root);
        let view = render_admin_dashboard(&self.vm, &self.listeners)?;
        append_child(&self.root, &view)
    }

    /// Handlers de click vivos tras el último render
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
