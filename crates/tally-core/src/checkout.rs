//! One checkout: collect, price, compact and submit an order.

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::menu::Menu;
use crate::order::{calculate_total, compact, Console, OrderCollector};
use crate::submission::{OrderHistoryRepository, OrderSubmitter, Receipt};

/// Drives an order from the first prompt to the history log.
pub struct Checkout<'a, R, H> {
    menu: &'a Menu,
    submitter: OrderSubmitter<R, H>,
}

impl<'a, R, H> Checkout<'a, R, H>
where
    R: Rng,
    H: OrderHistoryRepository,
{
    pub fn new(menu: &'a Menu, submitter: OrderSubmitter<R, H>) -> Self {
        Self { menu, submitter }
    }

    /// Runs one checkout against `console`.
    ///
    /// # Returns
    ///
    /// - `Ok(None)`: nothing was ordered, nothing was submitted
    /// - `Ok(Some(receipt))`: the order was confirmed (see
    ///   [`Receipt::is_recorded`] for the history write)
    /// - `Err`: the console was cancelled or failed
    pub fn run<C>(&mut self, console: &mut C) -> Result<Option<Receipt>>
    where
        C: Console + ?Sized,
    {
        let Some(order) = OrderCollector::new(self.menu).collect(console)? else {
            info!("No items ordered");
            return Ok(None);
        };

        let total = calculate_total(&order, self.menu)?;
        let lines = compact(order.items());
        info!("Submitting {} item(s), total {}", order.len(), total);

        Ok(Some(self.submitter.submit(&lines, total)))
    }
}
