//! Payload decoding
//!
//! Turns the serialized `json_filial` column into typed branches. Any shape
//! violation (malformed JSON, a missing required field, a wrong type) is a
//! [`DecodeError`].

use crate::domain::{Branch, DecodeError, Product, ProductId, RawProduct};

/// Decode a branch payload
///
/// A JSON `null` payload decodes as no branches.
///
/// # Examples
///
/// ```
/// use pricefan::core::decode::decode_branches;
/// use pricefan::domain::ProductId;
///
/// let branches = decode_branches(ProductId::new(1), r#"[{"idFilial": 7, "precoLivro": "9.90"}]"#).unwrap();
/// assert_eq!(branches.len(), 1);
/// assert_eq!(branches[0].book_price.as_deref(), Some("9.90"));
/// ```
pub fn decode_branches(product_id: ProductId, raw: &str) -> Result<Vec<Branch>, DecodeError> {
    serde_json::from_str::<Option<Vec<Branch>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| DecodeError::MalformedPayload {
            product_id,
            reason: e.to_string(),
        })
}

impl RawProduct {
    /// Decode this row into a [`Product`]
    pub fn decode(&self) -> Result<Product, DecodeError> {
        let branches = decode_branches(self.id, &self.payload)?;
        Ok(Product::new(self.id, branches))
    }
}
