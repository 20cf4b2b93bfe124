// ============================================================================
// EVENT HANDLING
// ============================================================================
// Cada Closure de wasm-bindgen vive en memoria de WASM hasta que se suelta.
// EventListeners guarda las de un render; clear() las desregistra y libera
// antes de construir el siguiente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

type ClickClosure = Closure<dyn FnMut(MouseEvent)>;

/// Listeners de click vivos del render actual
#[derive(Clone, Default)]
pub struct EventListeners {
    registered: Rc<RefCell<Vec<(Element, ClickClosure)>>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar click handler; queda vivo hasta el próximo clear()
    pub fn on_click<F>(&self, element: &Element, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        element.add_event_listener_with_callback(
            "click",
            closure.as_ref().unchecked_ref(),
        )?;
        self.registered.borrow_mut().push((element.clone(), closure));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registered.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.borrow().is_empty()
    }

    /// Desregistrar y liberar todos los handlers.
    /// No llamar desde dentro de un handler: la Closure en ejecución se liberaría.
    pub fn clear(&self) {
        let registered: Vec<(Element, ClickClosure)> = self.registered.borrow_mut().drain(..).collect();
        for (element, closure) in registered {
            if let Err(e) = element.remove_event_listener_with_callback(
                "click",
                closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("⚠️ [EVENTS] No se pudo quitar listener: {:?}", e);
            }
        }
    }
}
