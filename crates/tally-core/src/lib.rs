pub mod checkout;
pub mod config;
pub mod error;
pub mod menu;
pub mod order;
pub mod presentation;
pub mod submission;

// Re-export common types
pub use checkout::Checkout;
pub use config::{ConfigOverrides, TallyConfig};
pub use error::{Result, TallyError};
pub use rust_decimal::Decimal;
