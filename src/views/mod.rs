pub mod admin_dashboard;
pub mod sidebar;
pub mod order_table;
pub mod order_details;

pub use admin_dashboard::render_admin_dashboard;
pub use sidebar::render_sidebar;
pub use order_table::render_order_table;
pub use order_details::render_order_details;
