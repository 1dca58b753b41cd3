//! Order submission module.
//!
//! # Module Structure
//!
//! - `model`: confirmation numbers, history records and receipts
//! - `confirmation`: confirmation numbers from an injected random source
//! - `repository`: history log trait
//! - `submitter`: confirm and record an order

mod confirmation;
mod model;
mod repository;
mod submitter;

pub use confirmation::ConfirmationIssuer;
pub use model::{ConfirmationNumber, OrderRecord, Receipt};
pub use repository::OrderHistoryRepository;
pub use submitter::OrderSubmitter;
