// ============================================================================
// ORDER DETAILS VIEW - Panel de detalle del pedido seleccionado
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, EventListeners};
use crate::models::{CartItem, Order};
use crate::services::ImageUrlBuilder;
use crate::utils::{format_total, THUMBNAIL_SIZE};
use crate::viewmodels::DashboardViewModel;

pub fn render_order_details(
    vm: &DashboardViewModel,
    listeners: &EventListeners,
    order: &Order,
) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h3")?
        .text(&format!("Order Details - {}", order.id))
        .build()?;

    let close_btn = {
        let vm = vm.clone();
        ElementBuilder::new("button")?
            .class("btn-close-details")
            .attr("type", "button")
            .text("✕")
            .on_click(listeners, move |_e| vm.clear_selection())
            .build()?
    };

    let header = ElementBuilder::new("div")?
        .class("order-details-header")
        .child(&title)
        .child(&close_btn)
        .build()?;

    // Productos
    let images = ImageUrlBuilder::new()
        .width(THUMBNAIL_SIZE)
        .height(THUMBNAIL_SIZE);

    let products_label = ElementBuilder::new("span")?
        .class("detail-label detail-label--section")
        .text("Products: ")
        .build()?;
    let product_items = order
        .cart_items
        .iter()
        .map(|item| render_cart_item(item, &images))
        .collect::<Result<Vec<_>, JsValue>>()?;
    let products = ElementBuilder::new("ul")?
        .class("order-products")
        .child(&products_label)
        .children(&product_items)
        .build()?;

    ElementBuilder::new("section")?
        .class("order-details")
        .attr("data-order-id", &order.id.to_string())
        .child(&header)
        .child(&detail_line("Customer Name: ", &order.customer_name())?)
        .child(&detail_line("Address: ", &order.full_address())?)
        .child(&detail_line("Total: ", &format_total(order.total))?)
        .child(&products)
        .build()
}

fn render_cart_item(item: &CartItem, images: &ImageUrlBuilder) -> Result<Element, JsValue> {
    let name = ElementBuilder::new("span")?.text(&item.name).build()?;

    // Sin imagen resoluble solo se muestra el nombre
    let thumb = match item.image.as_ref().and_then(|img| images.url_for(img)) {
        Some(src) => {
            let size = THUMBNAIL_SIZE.to_string();
            Some(
                ElementBuilder::new("img")?
                    .class("product-thumb")
                    .attr("src", &src)
                    .attr("width", &size)
                    .attr("height", &size)
                    .attr("alt", &item.name)
                    .build()?,
            )
        }
        None => None,
    };

    ElementBuilder::new("li")?
        .class("order-product")
        .children(thumb.iter())
        .child(&name)
        .build()
}

fn detail_line(label: &str, value: &str) -> Result<Element, JsValue> {
    let label_el = ElementBuilder::new("span")?
        .class("detail-label")
        .text(label)
        .build()?;
    let value_el = ElementBuilder::new("span")?
        .class("detail-value")
        .text(value)
        .build()?;

    ElementBuilder::new("p")?
        .class("detail-line")
        .child(&label_el)
        .child(&value_el)
        .build()
}
