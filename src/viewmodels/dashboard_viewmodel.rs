// ============================================================================
// DASHBOARD VIEWMODEL - Carga, filtro, selección y logout
// ============================================================================
// Lógica de UI sobre AppState. Los services se inyectan como traits para
// poder ejecutar la lógica fuera del navegador.
// ============================================================================

use std::rc::Rc;
use crate::config::CONFIG;
use crate::models::{Order, OrderFilter};
use crate::services::{
    BrowserNavigator, CmsClient, LocalStorageSession, Navigator, OrderSource, SessionStore,
};
use crate::state::{AppState, LoadStatus};

#[derive(Clone)]
pub struct DashboardViewModel {
    state: AppState,
    source: Rc<dyn OrderSource>,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    login_route: String,
}

impl DashboardViewModel {
    /// ViewModel con los services del navegador
    pub fn new(state: AppState) -> Self {
        Self::with_services(
            state,
            Rc::new(CmsClient::new()),
            Rc::new(LocalStorageSession::new()),
            Rc::new(BrowserNavigator),
            CONFIG.login_route.clone(),
        )
    }

    pub fn with_services(
        state: AppState,
        source: Rc<dyn OrderSource>,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            state,
            source,
            session,
            navigator,
            login_route: login_route.into(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> Rc<dyn SessionStore> {
        self.session.clone()
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        self.navigator.clone()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Carga única de pedidos. Los errores se registran y no se propagan.
    pub async fn load(&self) {
        if self.state.get_load_status() != LoadStatus::Idle {
            log::debug!("⏭️ [ORDERS] Carga ya ejecutada, se ignora");
            return;
        }

        self.state.set_load_status(LoadStatus::Loading);
        log::info!("📦 [ORDERS] Cargando pedidos...");

        match self.source.fetch_orders().await {
            Ok(orders) => {
                log::info!("✅ [ORDERS] {} pedidos cargados", orders.len());
                self.state.set_load_status(LoadStatus::Loaded);
                self.state.set_orders(orders);
            }
            Err(e) => {
                log::error!("❌ [ORDERS] Error fetching orders: {}", e);
                self.state.set_load_status(LoadStatus::Failed);
            }
        }
    }

    pub fn set_filter(&self, filter: OrderFilter) {
        log::debug!("🔎 [FILTER] {}", filter);
        self.state.set_filter(filter);
    }

    /// Filtro a partir de su valor ("All", "pending", ...)
    pub fn set_filter_value(&self, value: &str) -> Result<(), String> {
        let filter = value.parse::<OrderFilter>()?;
        self.set_filter(filter);
        Ok(())
    }

    pub fn visible_orders(&self) -> Vec<Order> {
        self.state.visible_orders()
    }

    pub fn select_order(&self, order: Order) {
        log::debug!("👁️ [ORDERS] Pedido seleccionado: {}", order.id);
        self.state.select_order(order);
    }

    pub fn clear_selection(&self) {
        self.state.clear_selection();
    }

    pub fn selected_order(&self) -> Option<Order> {
        self.state.get_selected_order()
    }

    /// Borra el flag local y navega al login. No invalida nada en servidor.
    pub fn logout(&self) -> Result<(), String> {
        log::info!("🚪 [ADMIN] Logout");
        if let Err(e) = self.session.clear_logged_in() {
            log::error!("❌ [ADMIN] Error limpiando flag de sesión: {}", e);
        }
        self.navigator.navigate_to(&self.login_route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn order(id: &str, status: Option<&str>) -> Order {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "firstName": "Grace",
            "lastName": "Hopper",
            "total": 20,
            "status": status,
            "cartItems": [{ "name": "Mug", "image": null }]
        }))
        .unwrap()
    }

    struct FakeSource {
        result: Result<Vec<Order>, String>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn ok(orders: Vec<Order>) -> Rc<Self> {
            Rc::new(Self { result: Ok(orders), calls: Cell::new(0) })
        }

        fn failing(message: &str) -> Rc<Self> {
            Rc::new(Self { result: Err(message.to_string()), calls: Cell::new(0) })
        }
    }

    #[async_trait(?Send)]
    impl OrderSource for FakeSource {
        async fn fetch_orders(&self) -> Result<Vec<Order>, String> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    struct FakeSession {
        logged_in: Cell<bool>,
        fail_clear: bool,
    }

    impl SessionStore for FakeSession {
        fn is_logged_in(&self) -> bool {
            self.logged_in.get()
        }

        fn clear_logged_in(&self) -> Result<(), String> {
            if self.fail_clear {
                return Err("storage unavailable".to_string());
            }
            self.logged_in.set(false);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) -> Result<(), String> {
            self.visited.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    struct Fixture {
        vm: DashboardViewModel,
        source: Rc<FakeSource>,
        session: Rc<FakeSession>,
        navigator: Rc<RecordingNavigator>,
    }

    fn fixture(source: Rc<FakeSource>) -> Fixture {
        let session = Rc::new(FakeSession { logged_in: Cell::new(true), fail_clear: false });
        let navigator = Rc::new(RecordingNavigator::default());
        let vm = DashboardViewModel::with_services(
            AppState::new(),
            source.clone(),
            session.clone(),
            navigator.clone(),
            "/admin",
        );
        Fixture { vm, source, session, navigator }
    }

    #[test]
    fn load_replaces_orders_on_success() {
        let f = fixture(FakeSource::ok(vec![order("1", Some("pending")), order("2", Some("success"))]));
        block_on(f.vm.load());

        assert_eq!(f.vm.state().order_count(), 2);
        assert_eq!(f.vm.state().get_load_status(), LoadStatus::Loaded);
        assert_eq!(f.source.calls.get(), 1);
    }

    #[test]
    fn load_failure_keeps_collection_empty_and_does_not_propagate() {
        let f = fixture(FakeSource::failing("HTTP 500: boom"));
        let rendered = Rc::new(Cell::new(0));
        {
            let rendered = rendered.clone();
            f.vm.state().subscribe_to_changes(move || rendered.set(rendered.get() + 1));
        }

        block_on(f.vm.load());

        assert!(f.vm.state().get_orders().is_empty());
        assert_eq!(f.vm.state().get_load_status(), LoadStatus::Failed);
        assert_eq!(rendered.get(), 0);
    }

    #[test]
    fn load_runs_only_once_per_lifetime() {
        let f = fixture(FakeSource::ok(vec![order("1", None)]));
        block_on(f.vm.load());
        block_on(f.vm.load());
        assert_eq!(f.source.calls.get(), 1);

        let failing = fixture(FakeSource::failing("offline"));
        block_on(failing.vm.load());
        block_on(failing.vm.load());
        assert_eq!(failing.source.calls.get(), 1);
    }

    #[test]
    fn filter_narrows_visible_orders() {
        let f = fixture(FakeSource::ok(vec![
            order("1", Some("pending")),
            order("2", Some("success")),
            order("3", None),
        ]));
        block_on(f.vm.load());

        f.vm.set_filter(OrderFilter::Pending);
        let ids: Vec<String> = f.vm.visible_orders().iter().map(|o| o.id.to_string()).collect();
        assert_eq!(ids, vec!["1"]);

        f.vm.set_filter_value("All").unwrap();
        assert_eq!(f.vm.visible_orders().len(), 3);
    }

    #[test]
    fn unknown_filter_value_is_rejected_and_keeps_current() {
        let f = fixture(FakeSource::ok(vec![]));
        f.vm.set_filter(OrderFilter::Dispatch);
        assert!(f.vm.set_filter_value("Completed").is_err());
        assert_eq!(f.vm.state().get_filter(), OrderFilter::Dispatch);
    }

    #[test]
    fn selection_shows_exactly_that_order() {
        let f = fixture(FakeSource::ok(vec![order("1", Some("pending")), order("2", Some("dispatch"))]));
        block_on(f.vm.load());
        assert!(f.vm.selected_order().is_none());

        let second = f.vm.state().get_orders()[1].clone();
        f.vm.select_order(second.clone());
        assert_eq!(f.vm.selected_order(), Some(second));

        let first = f.vm.state().get_orders()[0].clone();
        f.vm.select_order(first.clone());
        assert_eq!(f.vm.selected_order(), Some(first));

        f.vm.clear_selection();
        assert!(f.vm.selected_order().is_none());
    }

    #[test]
    fn selection_survives_filter_changes() {
        let f = fixture(FakeSource::ok(vec![order("1", Some("pending"))]));
        block_on(f.vm.load());
        f.vm.select_order(order("1", Some("pending")));
        f.vm.set_filter(OrderFilter::Success);
        assert!(f.vm.selected_order().is_some());
    }

    #[test]
    fn logout_clears_flag_and_navigates_to_login() {
        let f = fixture(FakeSource::ok(vec![]));
        assert!(f.session.is_logged_in());

        f.vm.logout().unwrap();

        assert!(!f.session.is_logged_in());
        assert_eq!(*f.navigator.visited.borrow(), vec!["/admin".to_string()]);
    }

    #[test]
    fn logout_still_navigates_when_storage_fails() {
        let session = Rc::new(FakeSession { logged_in: Cell::new(true), fail_clear: true });
        let navigator = Rc::new(RecordingNavigator::default());
        let vm = DashboardViewModel::with_services(
            AppState::new(),
            FakeSource::ok(vec![]),
            session,
            navigator.clone(),
            "/admin",
        );

        assert!(vm.logout().is_ok());
        assert_eq!(navigator.visited.borrow().len(), 1);
    }
}
