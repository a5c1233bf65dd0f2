//! Domain identifier types
//!
//! Newtype wrappers keep product and branch identifiers from being swapped.
//! Both are transparent on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier, the `id` column of the source table
///
/// # Examples
///
/// ```
/// use pricefan::domain::ids::ProductId;
///
/// let id = ProductId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(serde_json::to_string(&id).unwrap(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a new ProductId
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Branch (filial) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(i64);

impl BranchId {
    /// Creates a new BranchId
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for BranchId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
