// ============================================================================
// CMS CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Ejecuta consultas GROQ contra la API HTTP del CMS. Sin lógica de UI.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::Url;
use crate::config::{CmsConfig, CONFIG};
use crate::models::Order;
use crate::services::traits::OrderSource;

/// Consulta fija: todos los documentos "order" con la proyección del dashboard
pub const ORDERS_QUERY: &str = r#"*[_type == "order"]{
  _id,
  firstName,
  lastName,
  phone,
  email,
  address,
  city,
  zipCode,
  total,
  discount,
  orderDate,
  status,
  cartItems[]->{
    name,
    image
  }
}"#;

/// Envoltorio de respuesta de `/data/query`
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: T,
    #[serde(default)]
    pub ms: Option<u64>,
}

/// Convertir cada documento por separado: un pedido mal formado se descarta
/// y se registra, el resto sigue visible
pub fn decode_orders(documents: Vec<Value>) -> Vec<Order> {
    let total = documents.len();
    let orders: Vec<Order> = documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| match serde_json::from_value::<Order>(document) {
            Ok(order) => Some(order),
            Err(e) => {
                log::warn!("⚠️ [CMS] Pedido #{} descartado: {}", index, e);
                None
            }
        })
        .collect();

    if orders.len() < total {
        log::warn!("⚠️ [CMS] {} de {} pedidos no se pudieron leer", total - orders.len(), total);
    }
    orders
}

/// Cliente del CMS - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct CmsClient {
    config: CmsConfig,
}

impl CmsClient {
    pub fn new() -> Self {
        Self::with_config(CONFIG.cms.clone())
    }

    pub fn with_config(config: CmsConfig) -> Self {
        Self { config }
    }

    fn host(&self) -> String {
        let api = if self.config.use_cdn { "apicdn" } else { "api" };
        format!("https://{}.{}.sanity.io", self.config.project_id, api)
    }

    /// URL GET de la consulta, con el GROQ codificado en `?query=`
    pub fn query_url(&self, query: &str) -> Result<String, String> {
        if self.config.project_id.is_empty() {
            return Err("CMS project id is not configured".to_string());
        }
        let base = format!(
            "{}/v{}/data/query/{}",
            self.host(),
            self.config.api_version,
            self.config.dataset
        );
        let url = Url::parse_with_params(&base, &[("query", query)])
            .map_err(|e| format!("Invalid query URL: {}", e))?;
        Ok(url.into())
    }

    /// Ejecutar una consulta GROQ y deserializar `result`
    pub async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, String> {
        let url = self.query_url(query)?;

        let mut request = Request::get(&url).header("Accept", "application/json");
        if let Some(token) = &self.config.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| response.status_text());
            return Err(format!("HTTP {}: {}", status, error_text));
        }

        let body = response
            .json::<QueryResponse<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if let Some(ms) = body.ms {
            log::debug!("⏱️ [CMS] Consulta resuelta en {} ms", ms);
        }

        Ok(body.result)
    }
}

impl Default for CmsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl OrderSource for CmsClient {
    async fn fetch_orders(&self) -> Result<Vec<Order>, String> {
        log::info!("📡 [CMS] Consultando pedidos en dataset '{}'", self.config.dataset);
        let documents = self.query::<Vec<Value>>(ORDERS_QUERY).await?;
        Ok(decode_orders(documents))
    }
}
