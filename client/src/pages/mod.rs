//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod favourites;
pub mod home;
pub mod product_detail;
pub mod products_list;
pub mod ui_kit;
