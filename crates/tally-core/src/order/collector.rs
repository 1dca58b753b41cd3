//! Interactive order collection.

use tracing::debug;

use super::console::{Console, Rejection};
use super::model::Order;
use crate::error::Result;
use crate::menu::{ItemName, Menu};

/// The answer that ends collection, compared after normalization.
pub const SENTINEL: &str = "End";

/// Largest quantity accepted for a single item.
pub const MAX_QUANTITY: i64 = 1_000;

pub const ITEM_PROMPT: &str = "Enter an item name (or 'End' to finish): ";

/// Prompt shown while waiting for the quantity of `name`.
pub fn quantity_prompt(name: &ItemName) -> String {
    format!("Enter quantity for '{}': ", name)
}

/// Collects an order by prompting for item names and quantities.
pub struct OrderCollector<'a> {
    menu: &'a Menu,
}

impl<'a> OrderCollector<'a> {
    pub fn new(menu: &'a Menu) -> Self {
        Self { menu }
    }

    /// Runs the prompt loop until the sentinel or the end of input.
    ///
    /// Unknown items and bad quantities are reported through
    /// [`Console::reject`] and asked again; they never end the loop.
    /// If the input ends while a quantity is pending, that item is dropped.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(order))`: at least one item was ordered
    /// - `Ok(None)`: nothing was ordered
    /// - `Err(TallyError::Cancelled)`: the console was interrupted
    pub fn collect<C>(&self, console: &mut C) -> Result<Option<Order>>
    where
        C: Console + ?Sized,
    {
        let mut order = Order::new();

        'items: loop {
            let Some(answer) = console.read_line(ITEM_PROMPT)? else {
                break;
            };

            let name = ItemName::normalize(&answer);
            if name.as_str() == SENTINEL {
                break;
            }
            if !self.menu.contains(&name) {
                console.reject(&Rejection::UnknownItem(name));
                continue;
            }

            let prompt = quantity_prompt(&name);
            loop {
                let Some(answer) = console.read_line(&prompt)? else {
                    debug!("Input ended while waiting for the quantity of {}", name);
                    break 'items;
                };

                match parse_quantity(&answer) {
                    Ok(quantity) => {
                        debug!("Added {} x {}", quantity, name);
                        order.add(&name, quantity);
                        break;
                    }
                    Err(rejection) => console.reject(&rejection),
                }
            }
        }

        Ok(if order.is_empty() { None } else { Some(order) })
    }
}

/// Parses an integer quantity in `1..=MAX_QUANTITY`.
pub fn parse_quantity(answer: &str) -> std::result::Result<usize, Rejection> {
    let trimmed = answer.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Rejection::QuantityNotInteger(trimmed.to_string()))?;

    match value {
        i64::MIN..=0 => Err(Rejection::QuantityNotPositive(value)),
        1..=MAX_QUANTITY => Ok(value as usize),
        _ => Err(Rejection::QuantityTooLarge(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::order::ScriptedConsole;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn menu() -> Menu {
        Menu::from_entries([
            ("Hamburger", Decimal::new(850, 2)),
            ("Pizza", Decimal::new(995, 2)),
            ("Sushi", Decimal::new(1050, 2)),
        ])
        .unwrap()
    }

    fn names(order: &Order) -> Vec<&str> {
        order.items().iter().map(ItemName::as_str).collect()
    }

    #[test]
    fn test_valid_order() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["Hamburger", "2", "Pizza", "1", "End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Hamburger", "Hamburger", "Pizza"]);
        assert!(console.rejections().is_empty());
    }

    #[test]
    fn test_sentinel_only_returns_none() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap();

        assert_eq!(order, None);
        assert_eq!(console.prompts(), &[ITEM_PROMPT]);
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["sushi", "1", "  eND  ", "Pizza"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Sushi"]);
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn test_unknown_item_does_not_consume_quantity_prompt() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["Fries", "3", "Hamburger", "1", "End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Hamburger"]);
        assert_eq!(
            console.rejections(),
            &[
                Rejection::UnknownItem(ItemName::normalize("Fries")),
                Rejection::UnknownItem(ItemName::normalize("3")),
            ]
        );
    }

    #[test]
    fn test_mixed_valid_invalid() {
        let menu = menu();
        let mut console =
            ScriptedConsole::new(["Hamburger", "2", "Sushi", "1", "Fries", "3", "End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Hamburger", "Hamburger", "Sushi"]);
    }

    #[test]
    fn test_non_integer_quantity_is_reprompted() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["pizza", "abc", "2", "End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Pizza", "Pizza"]);
        assert_eq!(
            console.rejections(),
            &[Rejection::QuantityNotInteger("abc".to_string())]
        );
        assert_eq!(
            console.prompts(),
            &[
                ITEM_PROMPT,
                "Enter quantity for 'Pizza': ",
                "Enter quantity for 'Pizza': ",
                ITEM_PROMPT,
            ]
        );
    }

    #[test]
    fn test_non_positive_quantity_is_reprompted() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["Sushi", "0", "-4", "1.5", "3", "End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(order.len(), 3);
        assert_eq!(
            console.rejections(),
            &[
                Rejection::QuantityNotPositive(0),
                Rejection::QuantityNotPositive(-4),
                Rejection::QuantityNotInteger("1.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_items_keep_request_order() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["Pizza", "1", "Sushi", "2", "Pizza", "1", "End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Pizza", "Sushi", "Sushi", "Pizza"]);
    }

    #[test]
    fn test_end_of_input_finishes_order() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["Hamburger", "1"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Hamburger"]);
    }

    #[test]
    fn test_end_of_input_drops_pending_item() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["Hamburger"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap();

        assert_eq!(order, None);
    }

    struct InterruptedConsole;

    impl Console for InterruptedConsole {
        fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
            Err(TallyError::Cancelled)
        }

        fn reject(&mut self, _rejection: &Rejection) {}
    }

    #[test]
    fn test_interrupt_propagates() {
        let menu = menu();
        let err = OrderCollector::new(&menu)
            .collect(&mut InterruptedConsole)
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 7 "), Ok(7));
        assert_eq!(parse_quantity("+2"), Ok(2));
        assert_eq!(parse_quantity("0"), Err(Rejection::QuantityNotPositive(0)));
        assert_eq!(
            parse_quantity("two"),
            Err(Rejection::QuantityNotInteger("two".to_string()))
        );
        assert_eq!(
            parse_quantity(""),
            Err(Rejection::QuantityNotInteger(String::new()))
        );
        assert_eq!(parse_quantity("1000"), Ok(1000));
        assert_eq!(parse_quantity("1001"), Err(Rejection::QuantityTooLarge(1001)));
        assert_eq!(
            parse_quantity("9223372036854775807"),
            Err(Rejection::QuantityTooLarge(i64::MAX))
        );
    }

    #[test]
    fn test_huge_quantity_is_reprompted() {
        let menu = menu();
        let mut console = ScriptedConsole::new(["Pizza", "9223372036854775807", "2", "End"]);

        let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

        assert_eq!(names(&order), vec!["Pizza", "Pizza"]);
        assert_eq!(
            console.rejections(),
            &[Rejection::QuantityTooLarge(i64::MAX)]
        );
    }

    const NAME_POOL: [&str; 6] = ["Hamburger", "Pizza", "Sushi", "French Fries", "Soda", "Hot Dog"];

    fn arb_menu() -> impl Strategy<Value = Menu> {
        prop::sample::subsequence(NAME_POOL.to_vec(), 1..=NAME_POOL.len())
            .prop_flat_map(|names| {
                let len = names.len();
                (Just(names), prop::collection::vec(0i64..100_000, len))
            })
            .prop_map(|(names, cents)| {
                Menu::from_entries(
                    names
                        .into_iter()
                        .zip(cents)
                        .map(|(name, c)| (name, Decimal::new(c, 2))),
                )
                .unwrap()
            })
    }

    proptest! {
        #[test]
        fn sentinel_only_never_orders(menu in arb_menu()) {
            let mut console = ScriptedConsole::new(["End"]);
            let order = OrderCollector::new(&menu).collect(&mut console).unwrap();
            prop_assert_eq!(order, None);
        }

        #[test]
        fn each_request_expands_to_its_quantity(
            menu in arb_menu(),
            requests in prop::collection::vec((any::<prop::sample::Index>(), 1usize..=20), 1..12),
        ) {
            let names: Vec<&ItemName> = menu.items().map(|item| &item.name).collect();
            let requests: Vec<(&ItemName, usize)> = requests
                .iter()
                .map(|(index, quantity)| (*index.get(&names), *quantity))
                .collect();

            let mut answers: Vec<String> = requests
                .iter()
                .flat_map(|(name, quantity)| [name.to_string(), quantity.to_string()])
                .collect();
            answers.push("End".to_string());
            let mut console = ScriptedConsole::new(answers);

            let order = OrderCollector::new(&menu).collect(&mut console).unwrap().unwrap();

            let expected: Vec<&ItemName> = requests
                .iter()
                .flat_map(|(name, quantity)| std::iter::repeat_n(*name, *quantity))
                .collect();
            let actual: Vec<&ItemName> = order.items().iter().collect();
            prop_assert_eq!(actual, expected);
            prop_assert!(console.rejections().is_empty());
        }
    }
}
