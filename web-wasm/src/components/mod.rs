//! UIコンポーネント

pub mod edit_modal;
pub mod plant_image;
pub mod plant_section;
pub mod plant_tile;
