// ============================================================================
// ORDER TABLE VIEW - Lista de pedidos visibles
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, EventListeners};
use crate::models::{Order, OrderId};
use crate::utils::{format_order_date, format_total, status_badge_class};
use crate::viewmodels::DashboardViewModel;

const COLUMNS: [&str; 6] = ["ID", "Customer", "Date", "Total", "Status", "Action"];

pub fn render_order_table(vm: &DashboardViewModel, listeners: &EventListeners) -> Result<Element, JsValue> {
    let orders = vm.visible_orders();
    let selected_id = vm.selected_order().map(|o| o.id);

    // Header
    let header_cells = COLUMNS
        .iter()
        .map(|column| ElementBuilder::new("th")?.text(column).build())
        .collect::<Result<Vec<_>, JsValue>>()?;
    let header_row = ElementBuilder::new("tr")?.children(&header_cells).build()?;
    let thead = ElementBuilder::new("thead")?.child(&header_row).build()?;

    // Body
    let rows = if orders.is_empty() {
        let empty = ElementBuilder::new("td")?
            .class("orders-empty")
            .attr("colspan", &COLUMNS.len().to_string())
            .text("No orders")
            .build()?;
        vec![ElementBuilder::new("tr")?.child(&empty).build()?]
    } else {
        orders
            .into_iter()
            .map(|order| render_order_row(vm, listeners, order, selected_id.as_ref()))
            .collect::<Result<Vec<_>, JsValue>>()?
    };
    let tbody = ElementBuilder::new("tbody")?.children(&rows).build()?;

    let table = ElementBuilder::new("table")?
        .class("orders-table")
        .child(&thead)
        .child(&tbody)
        .build()?;

    ElementBuilder::new("div")?
        .class("orders-table-wrapper")
        .child(&table)
        .build()
}

fn render_order_row(
    vm: &DashboardViewModel,
    listeners: &EventListeners,
    order: Order,
    selected_id: Option<&OrderId>,
) -> Result<Element, JsValue> {
    let class = if selected_id == Some(&order.id) { "order-row selected" } else { "order-row" };

    let status = ElementBuilder::new("span")?
        .class(status_badge_class(order.status.as_deref()))
        .text(order.status_label())
        .build()?;

    let cells = [
        text_cell(&order.id.to_string())?,
        text_cell(&order.customer_name())?,
        text_cell(&format_order_date(&order.order_date))?,
        text_cell(&format_total(order.total))?,
        ElementBuilder::new("td")?.child(&status).build()?,
        ElementBuilder::new("td")?.class("order-action").text("View").build()?,
    ];

    let id = order.id.to_string();
    let vm = vm.clone();
    ElementBuilder::new("tr")?
        .class(class)
        .attr("data-order-id", &id)
        .children(&cells)
        .on_click(listeners, move |_e| vm.select_order(order.clone()))
        .build()
}

fn text_cell(text: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("td")?.text(text).build()
}
