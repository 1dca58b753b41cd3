use rust_decimal::Decimal;

use super::model::Order;
use crate::error::{Result, TallyError};
use crate::menu::Menu;

/// Sums the menu price of every occurrence in `order`.
///
/// Items are not re-validated: an entry missing from the menu means the
/// caller built the order against a different menu, and fails with
/// [`TallyError::UnknownItem`]. A sum past [`Decimal::MAX`] fails with
/// [`TallyError::TotalOverflow`].
pub fn calculate_total(order: &Order, menu: &Menu) -> Result<Decimal> {
    order.items().iter().try_fold(Decimal::ZERO, |total, name| {
        let price = menu
            .price_of(name)
            .ok_or_else(|| TallyError::unknown_item(name.as_str()))?;
        total.checked_add(price).ok_or(TallyError::TotalOverflow)
    })
}
