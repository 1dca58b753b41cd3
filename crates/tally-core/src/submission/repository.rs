use super::model::OrderRecord;
use crate::error::Result;

/// Append-only sink for submitted orders.
pub trait OrderHistoryRepository {
    /// Appends one record, creating the log if it does not exist yet.
    fn append(&self, record: &OrderRecord) -> Result<()>;
}

impl<T: OrderHistoryRepository + ?Sized> OrderHistoryRepository for &T {
    fn append(&self, record: &OrderRecord) -> Result<()> {
        (**self).append(record)
    }
}
