pub mod order;
pub mod filter;

pub use order::{Order, OrderId, CartItem, ImageSource, ImageObject, AssetReference};
pub use filter::OrderFilter;
