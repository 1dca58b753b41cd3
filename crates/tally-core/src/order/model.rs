use crate::menu::ItemName;

/// One item occurrence per unit purchased, in the order they were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    items: Vec<ItemName>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `quantity` occurrences of `name`.
    pub fn add(&mut self, name: &ItemName, quantity: usize) {
        self.items.extend(std::iter::repeat_n(name.clone(), quantity));
    }

    pub fn items(&self) -> &[ItemName] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Concatenates two orders, keeping `self` first.
    pub fn concat(mut self, other: Order) -> Order {
        self.items.extend(other.items);
        self
    }
}

impl<S: AsRef<str>> FromIterator<S> for Order {
    /// Builds an order from raw names, normalizing each one.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|s| ItemName::normalize(s.as_ref()))
                .collect(),
        }
    }
}
