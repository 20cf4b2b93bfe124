// ============================================================================
// APP STATE - Estado global del dashboard
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Order, OrderFilter};

/// Estado de la carga inicial de pedidos
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    // Snapshot de solo lectura traído del CMS
    pub orders: Rc<RefCell<Vec<Order>>>,
    pub load_status: Rc<RefCell<LoadStatus>>,

    // UI State
    pub filter: Rc<RefCell<OrderFilter>>,
    pub selected_order: Rc<RefCell<Option<Order>>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            orders: Rc::new(RefCell::new(Vec::new())),
            load_status: Rc::new(RefCell::new(LoadStatus::Idle)),
            filter: Rc::new(RefCell::new(OrderFilter::All)),
            selected_order: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reemplazar la colección completa de pedidos
    pub fn set_orders(&self, orders: Vec<Order>) {
        *self.orders.borrow_mut() = orders;
        self.notify_subscribers();
    }

    pub fn get_orders(&self) -> Vec<Order> {
        self.orders.borrow().clone()
    }

    pub fn order_count(&self) -> usize {
        self.orders.borrow().len()
    }

    /// Pedidos visibles con el filtro activo
    pub fn visible_orders(&self) -> Vec<Order> {
        let filter = *self.filter.borrow();
        filter
            .apply(&self.orders.borrow())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn set_filter(&self, filter: OrderFilter) {
        *self.filter.borrow_mut() = filter;
        self.notify_subscribers();
    }

    pub fn get_filter(&self) -> OrderFilter {
        *self.filter.borrow()
    }

    /// Seleccionar pedido (reemplaza el anterior)
    pub fn select_order(&self, order: Order) {
        *self.selected_order.borrow_mut() = Some(order);
        self.notify_subscribers();
    }

    pub fn clear_selection(&self) {
        *self.selected_order.borrow_mut() = None;
        self.notify_subscribers();
    }

    pub fn get_selected_order(&self) -> Option<Order> {
        self.selected_order.borrow().clone()
    }

    pub fn set_load_status(&self, status: LoadStatus) {
        *self.load_status.borrow_mut() = status;
    }

    pub fn get_load_status(&self) -> LoadStatus {
        *self.load_status.borrow()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        // Copia para que un callback pueda suscribir sin un doble borrow
        let callbacks: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn order(id: &str, status: &str) -> Order {
        serde_json::from_value(serde_json::json!({ "_id": id, "status": status })).unwrap()
    }

    #[test]
    fn starts_empty_with_all_filter() {
        let state = AppState::new();
        assert_eq!(state.order_count(), 0);
        assert_eq!(state.get_filter(), OrderFilter::All);
        assert!(state.get_selected_order().is_none());
        assert_eq!(state.get_load_status(), LoadStatus::Idle);
    }

    #[test]
    fn visible_orders_follow_active_filter() {
        let state = AppState::new();
        state.set_orders(vec![order("1", "pending"), order("2", "dispatch")]);

        assert_eq!(state.visible_orders().len(), 2);
        state.set_filter(OrderFilter::Dispatch);
        let visible = state.visible_orders();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.to_string(), "2");
        state.set_filter(OrderFilter::Success);
        assert!(state.visible_orders().is_empty());
    }

    #[test]
    fn mutations_notify_subscribers() {
        let state = AppState::new();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            state.subscribe_to_changes(move || calls.set(calls.get() + 1));
        }

        state.set_orders(vec![order("1", "pending")]);
        state.set_filter(OrderFilter::Pending);
        state.select_order(order("1", "pending"));
        state.clear_selection();
        assert_eq!(calls.get(), 4);

        // El estado de carga es interno, no re-renderiza
        state.set_load_status(LoadStatus::Loaded);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn clones_share_the_same_state() {
        let state = AppState::new();
        let other = state.clone();
        other.select_order(order("7", "success"));
        assert_eq!(state.get_selected_order().map(|o| o.id.to_string()), Some("7".to_string()));
    }
}
