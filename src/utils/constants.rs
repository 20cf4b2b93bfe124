/// Clave de localStorage que marca la sesión del admin
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Elemento raíz donde se monta la aplicación
pub const ROOT_ELEMENT_ID: &str = "app";

/// Tamaño de las miniaturas de productos en el panel de detalle
pub const THUMBNAIL_SIZE: u32 = 40;
