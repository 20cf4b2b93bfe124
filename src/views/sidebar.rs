// ============================================================================
// SIDEBAR VIEW - Filtros de estado + logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, EventListeners};
use crate::models::OrderFilter;
use crate::viewmodels::DashboardViewModel;

pub fn render_sidebar(vm: &DashboardViewModel, listeners: &EventListeners) -> Result<Element, JsValue> {
    let active = vm.state().get_filter();

    let items = OrderFilter::ALL
        .into_iter()
        .map(|filter| {
            let class = if filter == active { "filter-item active" } else { "filter-item" };
            let vm = vm.clone();
            ElementBuilder::new("li")?
                .class(class)
                .attr("data-filter", filter.as_str())
                .text(filter.label())
                .on_click(listeners, move |_e| vm.set_filter(filter))
                .build()
        })
        .collect::<Result<Vec<_>, JsValue>>()?;

    let logout_btn = {
        let vm = vm.clone();
        ElementBuilder::new("button")?
            .class("btn-logout")
            .attr("type", "button")
            .text("Logout")
            .on_click(listeners, move |_e| {
                if let Err(e) = vm.logout() {
                    log::error!("❌ [ADMIN] Logout: {}", e);
                }
            })
            .build()?
    };

    let list = ElementBuilder::new("ul")?
        .class("filter-list")
        .children(&items)
        .child(&logout_btn)
        .build()?;

    let title = ElementBuilder::new("h2")?
        .class("admin-sidebar-title")
        .text("Admin Panel")
        .build()?;

    ElementBuilder::new("aside")?
        .class("admin-sidebar")
        .child(&title)
        .child(&list)
        .build()
}
