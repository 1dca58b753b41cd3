use rand::Rng;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::confirmation::ConfirmationIssuer;
use super::model::{OrderRecord, Receipt};
use super::repository::OrderHistoryRepository;

/// Confirms orders and appends them to the history log.
pub struct OrderSubmitter<R, H> {
    issuer: ConfirmationIssuer<R>,
    history: H,
}

impl<R, H> OrderSubmitter<R, H>
where
    R: Rng,
    H: OrderHistoryRepository,
{
    pub fn new(issuer: ConfirmationIssuer<R>, history: H) -> Self {
        Self { issuer, history }
    }

    /// Issues a confirmation number and records the order.
    ///
    /// A failed history write is logged and returned in the receipt; the
    /// order still counts as confirmed.
    pub fn submit<S: AsRef<str>>(&mut self, lines: &[S], total: Decimal) -> Receipt {
        let record = OrderRecord::new(self.issuer.issue(), lines, total);

        let history_error = match self.history.append(&record) {
            Ok(()) => {
                debug!("Recorded order {}", record.confirmation);
                None
            }
            Err(e) => {
                warn!("Failed to record order {}: {}", record.confirmation, e);
                Some(e)
            }
        };

        Receipt {
            record,
            history_error,
        }
    }
}
