//! Menu domain module.
//!
//! # Module Structure
//!
//! - `model`: item names, prices and the menu mapping
//! - `repository`: menu source trait

mod model;
mod repository;

pub use model::{format_price, InvalidMenuEntry, ItemName, Menu, MenuItem};
pub use repository::MenuRepository;
