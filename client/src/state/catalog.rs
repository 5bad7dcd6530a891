//! Product catalog provider: where products come from and the status of the
//! most recent fetch.
//!
//! DESIGN
//! ======
//! `CatalogSource` hides whether products come from the built-in fixture or
//! a remote endpoint. `CatalogSnapshot` is the plain-data holder that
//! page-level stores wrap: it replaces its list wholesale on success and
//! keeps the previous list on failure, recording the error beside it.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::config::ClientConfig;
use crate::net::api::{self, CatalogError};
use crate::net::types::{Price, Product, ProductId};

/// Where catalog products are loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// Built-in furniture fixture; always succeeds.
    Fixture,
    /// HTTP `GET` against a products endpoint.
    Remote { endpoint: String },
}

impl CatalogSource {
    pub fn from_config(config: &ClientConfig) -> Self {
        if config.use_fixture {
            Self::Fixture
        } else {
            Self::Remote { endpoint: config.products_endpoint.clone() }
        }
    }

    /// Load the full product list.
    ///
    /// # Errors
    ///
    /// Remote sources return the [`CatalogError`] of the failed request.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        match self {
            Self::Fixture => Ok(mock_products()),
            Self::Remote { endpoint } => api::fetch_products(endpoint).await,
        }
    }

    /// Load one product; `Ok(None)` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Remote sources return the [`CatalogError`] of the failed request.
    pub async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        match self {
            Self::Fixture => Ok(mock_products().into_iter().find(|p| p.id == id)),
            Self::Remote { endpoint } => api::fetch_product(endpoint, id).await,
        }
    }
}

/// Most recently fetched product list plus fetch status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    loading: bool,
    error: Option<CatalogError>,
}

impl CatalogSnapshot {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Mark a fetch as in flight; the current list stays visible.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply a settled fetch. Success replaces the list and clears any
    /// previous error; failure keeps the list and records the error.
    pub fn finish_fetch(&mut self, result: Result<Vec<Product>, CatalogError>) {
        self.loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("Failed to fetch products: {e}");
                self.error = Some(e);
            }
        }
    }

    /// Drop the held list and status.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn fixture(
    id: ProductId,
    title: &str,
    description: &str,
    price: &str,
    image_url: Option<&str>,
    image_placeholder: &str,
) -> Product {
    Product {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        price: Price::Text(price.to_owned()),
        image_url: image_url.map(str::to_owned),
        image_placeholder: Some(image_placeholder.to_owned()),
    }
}

/// Built-in furniture fixture used until a products backend is configured.
pub fn mock_products() -> Vec<Product> {
    vec![
        fixture(
            1,
            "Chest-rack 400*1200 mm",
            "Open shelving chest in laminated chipboard with four compartments and a top drawer.",
            "1 000 р",
            Some("https://i.pinimg.com/1200x/44/60/4d/44604d7a641b63112a8df54fffd3e36a.jpg"),
            "chest",
        ),
        fixture(
            2,
            "Oak dining table 1600*900 mm",
            "Solid oak table with oiled finish; seats six.",
            "34 990 р",
            None,
            "table",
        ),
        fixture(
            3,
            "Three-seat sofa Nord",
            "Linen-blend upholstery, removable covers, beech legs.",
            "52 400 р",
            None,
            "sofa",
        ),
        fixture(
            4,
            "Bedside table Lumi",
            "Compact bedside table with one drawer and a cable cut-out.",
            "4 290 р",
            None,
            "bedside",
        ),
        fixture(
            5,
            "Wardrobe 2-door 800*2100 mm",
            "Hinged wardrobe with hanging rail and three shelves.",
            "18 750 р",
            None,
            "wardrobe",
        ),
        fixture(
            6,
            "Armchair Vesta",
            "Lounge armchair in velour with a birch frame.",
            "15 300 р",
            None,
            "armchair",
        ),
        fixture(
            7,
            "Bookcase Linea 5 shelves",
            "Tall bookcase with adjustable shelves and wall fixing kit.",
            "7 990 р",
            None,
            "bookcase",
        ),
        fixture(
            8,
            "Chair Scandi, set of 2",
            "Molded seat chairs with solid beech legs.",
            "6 480 р",
            None,
            "chairs",
        ),
        fixture(
            9,
            "TV stand Loft 1400 mm",
            "Metal frame TV stand with two open shelves.",
            "9 870 р",
            None,
            "tv stand",
        ),
    ]
}
