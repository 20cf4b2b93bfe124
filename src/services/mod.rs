pub mod traits;
pub mod api_client;
pub mod image_service;
pub mod auth_service;

pub use traits::{OrderSource, SessionStore, Navigator};
pub use api_client::{CmsClient, decode_orders, ORDERS_QUERY};
pub use image_service::ImageUrlBuilder;
pub use auth_service::{LocalStorageSession, BrowserNavigator, ensure_logged_in};
