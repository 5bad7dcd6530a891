//! Product DTOs for the catalog boundary.
//!
//! DESIGN
//! ======
//! `ProductServer` is the tolerant wire shape (field names and optionality
//! vary between integration points). `Product` is the normalized entity the
//! UI and state modules consume; it is replaced wholesale on every fetch and
//! never mutated in place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable product identifier shared by the catalog and the favourites set.
pub type ProductId = i64;

/// Product price as delivered by the data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Already display-formatted upstream (e.g. `"1 000 р"`).
    Text(String),
    /// Raw numeric amount in roubles.
    Amount(f64),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Amount(amount) => write!(f, "{} р", format_amount(*amount)),
        }
    }
}

/// Group the integer part by thousands with spaces; keep two decimals only
/// when the amount is fractional.
fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let abs = amount.abs();
    let fixed = format!("{abs:.2}");
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if cents == "00" { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{cents}") }
}

/// A purchasable catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Text shown in the image slot when `image_url` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_placeholder: Option<String>,
}

impl Product {
    /// Map the tolerant wire shape onto the display entity.
    pub fn normalize(product: ProductServer) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description.unwrap_or_default(),
            price: product.price,
            image_url: product.image_url.filter(|url| !url.trim().is_empty()),
            image_placeholder: product.image_placeholder,
        }
    }
}

/// Product object as returned by a products endpoint.
///
/// Accepts either `title` or `name`, a missing or `null` description, and a
/// string or numeric price. `stock` and `category_id` are carried through
/// deserialization but unused by the storefront views.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductServer {
    pub id: ProductId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    #[serde(default, rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
    #[serde(default, rename = "imagePlaceholder", alias = "image_placeholder")]
    pub image_placeholder: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}
