use serde::de::{Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identificador del documento en el CMS (`_id`)
/// Se acepta como string o como número, siempre se muestra como texto
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Loose::deserialize(deserializer)? {
            Loose::Int(n) => Ok(OrderId::Number(n)),
            // Fuera de i64 o con decimales: se conserva el texto exacto
            Loose::UInt(n) => Ok(OrderId::Text(n.to_string())),
            Loose::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_F64 => Ok(OrderId::Number(f as i64)),
            Loose::Float(f) => Ok(OrderId::Text(f.to_string())),
            Loose::Text(s) => Ok(OrderId::Text(s)),
            Loose::Bool(_) | Loose::Other(_) => Err(D::Error::custom("_id must be a string or a number")),
        }
    }
}

/// 2^53: enteros representables sin pérdida en un f64
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Valor JSON de tipo desconocido, para campos que el CMS no tipa de forma estricta
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bool(bool),
    Other(IgnoredAny),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Pedido tal como lo devuelve la proyección de la consulta de pedidos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub discount: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub order_date: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "cart_items_skip_null")]
    pub cart_items: Vec<CartItem>,
}

impl Order {
    /// "Nombre Apellido"
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "calle, ciudad, código postal"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.zip_code)
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

/// Línea del carrito (producto referenciado, ya resuelto por `->`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageSource>,
}

/// Imagen de producto: referencia directa o objeto imagen del CMS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Reference(String),
    Object(ImageObject),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub asset: Option<AssetReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReference {
    #[serde(rename = "_ref")]
    pub reference: String,
}

impl ImageSource {
    /// Referencia del asset (`image-<id>-<W>x<H>-<ext>`), si existe
    pub fn asset_ref(&self) -> Option<&str> {
        match self {
            ImageSource::Reference(r) if !r.is_empty() => Some(r.as_str()),
            ImageSource::Reference(_) => None,
            ImageSource::Object(obj) => obj.asset.as_ref().map(|a| a.reference.as_str()),
        }
    }
}

// GROQ devuelve `null` para campos proyectados que no existen, y los documentos
// editados a mano pueden traer números como texto o al revés.

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => s,
        Loose::Int(n) => n.to_string(),
        Loose::UInt(n) => n.to_string(),
        Loose::Float(f) => f.to_string(),
        Loose::Bool(b) => b.to_string(),
        Loose::Other(_) => String::new(),
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Int(n) => n as f64,
        Loose::UInt(n) => n as f64,
        Loose::Float(f) => f,
        Loose::Text(s) => s.trim().parse().unwrap_or(0.0),
        Loose::Bool(_) | Loose::Other(_) => 0.0,
    })
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => Some(s),
        Loose::Int(n) => Some(n.to_string()),
        Loose::UInt(n) => Some(n.to_string()),
        Loose::Float(f) => Some(f.to_string()),
        Loose::Bool(b) => Some(b.to_string()),
        Loose::Other(_) => None,
    })
}

/// Las referencias rotas (`cartItems[]->`) llegan como `null`: se descartan
fn cart_items_skip_null<'de, D>(deserializer: D) -> Result<Vec<CartItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<CartItem>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}
