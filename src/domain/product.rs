//! Product pricing domain model
//!
//! These types mirror the `json_filial` payload stored next to every product:
//! an array of branches, each carrying the best prices achieved under
//! promotional campaigns and an optional book price.

use super::ids::{BranchId, ProductId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A price as published for a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Price amount
    ///
    /// Whole amounts are written without a fractional part (`20`, not `20.0`).
    #[serde(rename = "valor", serialize_with = "serialize_amount")]
    pub amount: f64,

    /// Payment method code
    #[serde(rename = "formaPagamento")]
    pub payment_method: i64,

    /// Price kind code
    #[serde(rename = "tipoPreco")]
    pub price_kind: i64,
}

/// Promotional campaign with its validity window
///
/// Dates are kept as the text found in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "inicioVigencia")]
    pub starts_on: String,

    #[serde(rename = "fimVigencia")]
    pub ends_on: String,
}

/// A price achieved under a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPrice {
    #[serde(rename = "preco")]
    pub price: Price,

    #[serde(rename = "campanha")]
    pub campaign: Campaign,
}

/// Pricing for one product at one branch
///
/// An absent or `null` best-price list decodes as empty. The book price keeps
/// "absent" (`None`) distinct from an empty string; absent values and empty
/// lists are omitted again on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(rename = "idFilial")]
    pub branch_id: BranchId,

    #[serde(
        rename = "melhoresPrecos",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub best_prices: Vec<BestPrice>,

    #[serde(rename = "precoLivro", default, skip_serializing_if = "Option::is_none")]
    pub book_price: Option<String>,
}

impl Branch {
    /// Creates a branch with no best prices and no book price
    pub fn new(branch_id: BranchId) -> Self {
        Self {
            branch_id,
            best_prices: Vec::new(),
            book_price: None,
        }
    }

    /// Adds a best price
    pub fn with_best_price(mut self, best_price: BestPrice) -> Self {
        self.best_prices.push(best_price);
        self
    }

    /// Sets the book price
    pub fn with_book_price(mut self, book_price: impl Into<String>) -> Self {
        self.book_price = Some(book_price.into());
        self
    }
}

/// A decoded product row
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub branches: Vec<Branch>,
}

impl Product {
    /// Creates a product from its id and decoded branches
    pub fn new(id: ProductId, branches: Vec<Branch>) -> Self {
        Self { id, branches }
    }
}

/// A product row as fetched from the record store, payload still serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProduct {
    pub id: ProductId,
    pub payload: String,
}

impl RawProduct {
    /// Creates a raw product row
    pub fn new(id: impl Into<ProductId>, payload: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            payload: payload.into(),
        }
    }
}

/// Largest magnitude below which every whole `f64` is exactly an `i64`
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.fract() == 0.0 && amount.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
