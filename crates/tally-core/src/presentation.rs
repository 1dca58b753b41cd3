//! Grid rendering of the menu.

use crate::menu::{format_price, Menu};

const HEADERS: [&str; 2] = ["Item", "Price"];

/// Extra width every column gets beyond its header.
const MIN_HEADER_PADDING: usize = 2;

/// Renders the menu as a grid table.
///
/// ```text
/// +-----------+---------+
/// | Item      | Price   |
/// +===========+=========+
/// | Hamburger | $8.50   |
/// +-----------+---------+
/// ```
pub fn render_menu_table(menu: &Menu) -> String {
    let rows: Vec<[String; 2]> = menu
        .items()
        .map(|item| [item.name.to_string(), format_price(item.price)])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count() + MIN_HEADER_PADDING);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = separator(&widths, '-');
    let body: Vec<String> = rows.iter().map(|row| row_line(&widths, row)).collect();

    let mut table = rule.clone();
    table.push_str(&row_line(&widths, &HEADERS));
    table.push_str(&separator(&widths, '='));
    table.push_str(&body.join(rule.as_str()));
    table.push_str(&rule);
    table
}

fn separator(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat_n(fill, width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line<S: AsRef<str>>(widths: &[usize], cells: &[S]) -> String {
    let mut line = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        line.push_str(&format!(" {:<width$} |", cell.as_ref(), width = width));
    }
    line.push('\n');
    line
}
