use std::fmt;

use rust_decimal::Decimal;

use crate::error::TallyError;
use crate::menu::format_price;

/// Random identifier handed to the customer. Not guaranteed unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfirmationNumber(pub(super) u32);

impl ConfirmationNumber {
    pub const MIN: u32 = 100_000;
    pub const MAX: u32 = 999_999;

    /// Returns `None` outside `[MIN, MAX]`.
    pub fn new(value: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ConfirmationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the order history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub confirmation: ConfirmationNumber,
    /// Compacted order lines joined with `", "`
    pub summary: String,
    pub total: Decimal,
}

impl OrderRecord {
    pub fn new<S: AsRef<str>>(confirmation: ConfirmationNumber, lines: &[S], total: Decimal) -> Self {
        let summary = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            confirmation,
            summary,
            total,
        }
    }

    /// The total as written to the log, e.g. `$26.95`.
    pub fn total_display(&self) -> String {
        format_price(self.total)
    }

    /// Fields in log column order.
    pub fn to_row(&self) -> [String; 3] {
        [
            self.confirmation.to_string(),
            self.summary.clone(),
            self.total_display(),
        ]
    }
}

/// Outcome of submitting an order.
///
/// A failed history write does not void the confirmation. It is kept here
/// so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub record: OrderRecord,
    pub history_error: Option<TallyError>,
}

impl Receipt {
    pub fn is_recorded(&self) -> bool {
        self.history_error.is_none()
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Your order ({}) confirmed! Total price: {}",
            self.record.confirmation,
            self.record.total_display()
        )
    }
}
