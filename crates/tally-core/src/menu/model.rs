//! Menu domain model.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::{Result, TallyError};

/// A normalized menu item name.
///
/// Every name that enters the system, whether read from the menu file or
/// typed at a prompt, goes through [`ItemName::normalize`], so lookups never
/// depend on how the user capitalized the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemName(String);

impl ItemName {
    /// Trims surrounding whitespace and title-cases the rest.
    ///
    /// A letter is uppercased when the character before it is not a letter,
    /// and lowercased otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_core::menu::ItemName;
    ///
    /// assert_eq!(ItemName::normalize("  french FRIES ").as_str(), "French Fries");
    /// assert_eq!(ItemName::normalize("end").as_str(), "End");
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut normalized = String::with_capacity(trimmed.len());
        let mut previous_is_letter = false;

        for c in trimmed.chars() {
            if previous_is_letter {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.extend(c.to_uppercase());
            }
            previous_is_letter = c.is_alphabetic();
        }

        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Formats an amount as dollars with two decimals, e.g. `$25.85`.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// A single purchasable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: ItemName,
    pub price: Decimal,
}

/// Reasons a single menu entry is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMenuEntry {
    BlankName,
    NegativePrice { name: ItemName, price: Decimal },
    Duplicate(ItemName),
}

impl fmt::Display for InvalidMenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMenuEntry::BlankName => write!(f, "item name is blank"),
            InvalidMenuEntry::NegativePrice { name, price } => {
                write!(f, "price of '{}' is negative ({})", name, price)
            }
            InvalidMenuEntry::Duplicate(name) => write!(f, "item '{}' is listed twice", name),
        }
    }
}

impl std::error::Error for InvalidMenuEntry {}

/// Mapping from item name to unit price.
///
/// Items keep the order they were inserted in, which is the order the menu
/// is displayed in.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
    index: HashMap<ItemName, usize>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a menu from `(name, price)` pairs.
    ///
    /// Errors carry the 1-based position of the offending entry.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let mut menu = Self::new();
        for (position, (name, price)) in entries.into_iter().enumerate() {
            menu.insert(name.as_ref(), price)
                .map_err(|e| TallyError::menu_parse(position as u64 + 1, e.to_string()))?;
        }
        Ok(menu)
    }

    /// Normalizes `raw_name` and adds it with `price`.
    pub fn insert(
        &mut self,
        raw_name: &str,
        price: Decimal,
    ) -> std::result::Result<&MenuItem, InvalidMenuEntry> {
        let name = ItemName::normalize(raw_name);
        if name.is_empty() {
            return Err(InvalidMenuEntry::BlankName);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(InvalidMenuEntry::NegativePrice { name, price });
        }
        if self.index.contains_key(&name) {
            return Err(InvalidMenuEntry::Duplicate(name));
        }

        self.index.insert(name.clone(), self.items.len());
        self.items.push(MenuItem { name, price });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Returns the price of an already-normalized name.
    pub fn price_of(&self, name: &ItemName) -> Option<Decimal> {
        self.index.get(name).map(|&i| self.items[i].price)
    }

    /// Normalizes `raw_name` and looks it up.
    pub fn lookup(&self, raw_name: &str) -> Option<&MenuItem> {
        let name = ItemName::normalize(raw_name);
        self.index.get(&name).map(|&i| &self.items[i])
    }

    pub fn contains(&self, name: &ItemName) -> bool {
        self.index.contains_key(name)
    }

    /// Items in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
