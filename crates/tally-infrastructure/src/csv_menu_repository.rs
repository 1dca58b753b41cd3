//! CSV-backed menu source.
//!
//! ```text
//! Item,Price
//! Hamburger,8.50
//! French Fries,5.75
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use tally_core::menu::{Menu, MenuRepository};
use tally_core::{Result, TallyError};

const ITEM_COLUMN: &str = "Item";
const PRICE_COLUMN: &str = "Price";

#[derive(Debug, Deserialize)]
struct MenuRow {
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "Price")]
    price: String,
}

/// Reads the menu from a CSV file with `Item` and `Price` columns.
///
/// Extra columns are ignored.
pub struct CsvMenuRepository {
    path: PathBuf,
}

impl CsvMenuRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

}

impl MenuRepository for CsvMenuRepository {
    fn load(&self) -> Result<Menu> {
        if !self.path.is_file() {
            return Err(TallyError::menu_not_found(self.path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| open_error(&self.path, &e))?;

        let headers = reader.headers().map_err(|e| csv_error(&e))?.clone();
        for column in [ITEM_COLUMN, PRICE_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(TallyError::menu_parse(1, format!("missing '{}' column", column)));
            }
        }

        let mut menu = Menu::new();
        for result in reader.records() {
            let record = result.map_err(|e| csv_error(&e))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let row: MenuRow = record
                .deserialize(Some(&headers))
                .map_err(|e| TallyError::menu_parse(line, e.to_string()))?;

            let price = parse_price(&row.price).ok_or_else(|| {
                TallyError::menu_parse(
                    line,
                    format!("invalid price '{}' for '{}'", row.price, row.item),
                )
            })?;

            menu.insert(&row.item, price)
                .map_err(|e| TallyError::menu_parse(line, e.to_string()))?;
        }

        tracing::debug!("Loaded {} menu items from {:?}", menu.len(), self.path);
        Ok(menu)
    }
}

fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn open_error(path: &Path, e: &csv::Error) -> TallyError {
    TallyError::menu_unreadable(path.display().to_string(), e.to_string())
}

fn csv_error(e: &csv::Error) -> TallyError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    TallyError::menu_parse(line, e.to_string())
}
