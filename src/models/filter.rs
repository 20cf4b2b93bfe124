use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::models::order::Order;

/// Filtro de estado seleccionado en el sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderFilter {
    #[default]
    #[serde(rename = "All")]
    All,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "dispatch")]
    Dispatch,
    #[serde(rename = "success")]
    Success,
}

impl OrderFilter {
    /// Orden en el que aparecen en el sidebar
    pub const ALL: [OrderFilter; 4] = [
        OrderFilter::All,
        OrderFilter::Pending,
        OrderFilter::Dispatch,
        OrderFilter::Success,
    ];

    /// Valor comparado contra `Order::status`
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderFilter::All => "All",
            OrderFilter::Pending => "pending",
            OrderFilter::Dispatch => "dispatch",
            OrderFilter::Success => "success",
        }
    }

    /// Texto del sidebar
    pub fn label(&self) -> &'static str {
        match self {
            OrderFilter::All => "All Orders",
            OrderFilter::Pending => "Pending",
            OrderFilter::Dispatch => "Dispatch",
            OrderFilter::Success => "Completed",
        }
    }

    /// Comparación exacta y sensible a mayúsculas
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            other => order.status.as_deref() == Some(other.as_str()),
        }
    }

    /// Subconjunto visible, en el mismo orden que la colección original
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

impl fmt::Display for OrderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderFilter::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown order filter: {}", s))
    }
}
