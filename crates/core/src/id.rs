//! Strongly-typed identifiers used across the storefront.
//!
//! Both identifiers are opaque strings supplied by the seed data. The `Sku` is
//! the stable business key used to join the local catalog with remote records;
//! `ProductId` is a separate local identifier (cart lines are keyed by it).

use serde::{Deserialize, Serialize};

/// Stock-keeping unit: unique, stable business key of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Local product identifier, distinct from the SKU.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

macro_rules! impl_str_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_str_newtype!(Sku);
impl_str_newtype!(ProductId);

impl Sku {
    /// Case-insensitive comparison used when matching free-text searches.
    pub fn matches_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}
