// ============================================================================
// ADMIN DASHBOARD - Sidebar + tabla de pedidos + detalle
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, EventListeners};
use crate::viewmodels::DashboardViewModel;
use crate::views::order_details::render_order_details;
use crate::views::order_table::render_order_table;
use crate::views::sidebar::render_sidebar;

/// Renderizar dashboard admin completo.
/// Los handlers de click quedan registrados en `listeners`.
pub fn render_admin_dashboard(vm: &DashboardViewModel, listeners: &EventListeners) -> Result<Element, JsValue> {
    log::debug!(
        "👑 [ADMIN] render_admin_dashboard() filtro={} pedidos={}",
        vm.state().get_filter(),
        vm.state().order_count()
    );

    let title = ElementBuilder::new("h2")?.text("Orders").build()?;
    let table = render_order_table(vm, listeners)?;

    // Panel de detalle solo con pedido seleccionado
    let details = match vm.selected_order() {
        Some(order) => Some(render_order_details(vm, listeners, &order)?),
        None => None,
    };

    let main = ElementBuilder::new("main")?
        .class("admin-main")
        .child(&title)
        .child(&table)
        .children(details.iter())
        .build()?;

    let sidebar = render_sidebar(vm, listeners)?;

    ElementBuilder::new("div")?
        .class("admin-container")
        .child(&sidebar)
        .child(&main)
        .build()
}
