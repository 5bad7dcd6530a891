pub mod button;
pub mod card;
pub mod cards_list;
pub mod footer;
pub mod header;
pub mod icon_button;
pub mod icons;
pub mod input;
pub mod page_wrapper;
pub mod product_image;
pub mod typography;
