// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de elementos
// ============================================================================
// El primer error del DOM se guarda y se devuelve en build(), así la cadena
// no necesita un `?` por cada paso.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content, EventListeners};

pub struct ElementBuilder {
    element: Element,
    error: Option<JsValue>,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
            error: None,
        })
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.try_step(|el| set_attribute(el, name, value))
    }

    pub fn child(self, child: &Element) -> Self {
        self.try_step(|el| append_child(el, child))
    }

    pub fn children<'a, I>(self, children: I) -> Self
    where
        I: IntoIterator<Item = &'a Element>,
    {
        children.into_iter().fold(self, |builder, child| builder.child(child))
    }

    pub fn on_click<F>(self, listeners: &EventListeners, handler: F) -> Self
    where
        F: FnMut(MouseEvent) + 'static,
    {
        self.try_step(|el| listeners.on_click(el, handler))
    }

    pub fn build(self) -> Result<Element, JsValue> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.element),
        }
    }

    fn try_step<F>(mut self, step: F) -> Self
    where
        F: FnOnce(&Element) -> Result<(), JsValue>,
    {
        if self.error.is_none() {
            if let Err(e) = step(&self.element) {
                self.error = Some(e);
            }
        }
        self
    }
}
