//! Client state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` is the product provider shared by every page. `favourites` is
//! the app-wide registry provided once from `App`, and `products_page` is
//! scoped to the catalog route through the `local` store helpers.

pub mod catalog;
pub mod favourites;
pub mod local;
pub mod products_page;
