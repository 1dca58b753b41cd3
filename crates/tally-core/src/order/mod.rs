//! Order domain module.
//!
//! # Module Structure
//!
//! - `model`: the order as a flat list of item occurrences
//! - `console`: input source abstraction and scripted implementation
//! - `collector`: the interactive item/quantity loop
//! - `pricing`: order totals
//! - `compaction`: counted display lines

mod collector;
mod compaction;
mod console;
mod model;
mod pricing;

pub use collector::{
    parse_quantity, quantity_prompt, OrderCollector, ITEM_PROMPT, MAX_QUANTITY, SENTINEL,
};
pub use compaction::compact;
pub use console::{Console, Rejection, ScriptedConsole};
pub use model::Order;
pub use pricing::calculate_total;
