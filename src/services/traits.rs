use async_trait::async_trait;
use crate::models::Order;

/// Fuente remota de pedidos (cliente del CMS en producción, fakes en tests)
#[async_trait(?Send)]
pub trait OrderSource {
    /// Ejecutar la consulta fija de pedidos
    async fn fetch_orders(&self) -> Result<Vec<Order>, String>;
}

/// Flag persistido de sesión iniciada
pub trait SessionStore {
    fn is_logged_in(&self) -> bool;

    fn clear_logged_in(&self) -> Result<(), String>;
}

/// Cambio de ruta del navegador
pub trait Navigator {
    fn navigate_to(&self, path: &str) -> Result<(), String>;
}
