//! Column-aligned table rendering for command output
//!
//! Commands describe their presentation as a list of [`Column`]s, each
//! pairing a header with a value formatter. Widths are computed from the
//! data, so tables stay aligned whatever the API returns.

use rusty_money::{iso, Money};

use crate::model::Amount;

/// One table column: a header and a formatter producing the cell value.
pub struct Column<T> {
    header: &'static str,
    value: Box<dyn Fn(&T) -> String>,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, value: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            header,
            value: Box::new(value),
        }
    }
}

/// Print rows as a table, or a notice when there is nothing to show.
pub fn print<T>(rows: &[T], columns: &[Column<T>]) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }
    print!("{}", render(rows, columns));
}

/// Render rows into an aligned table with a dashed header separator.
#[must_use]
pub fn render<T>(rows: &[T], columns: &[Column<T>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|column| (column.value)(row)).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.header.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let headers: Vec<String> = columns.iter().map(|c| c.header.to_string()).collect();
    let total_width: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

    let mut out = String::new();
    out.push_str(&format_row(&headers, &widths));
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    for row in &cells {
        out.push_str(&format_row(row, &widths));
    }

    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell, width = widths[i]));
    }
    line.truncate(line.trim_end().len());
    line.push('\n');

    line
}

/// Shorten long identifiers for display.
#[must_use]
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let head: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

/// Truncate an ISO-8601 timestamp to its date part.
#[must_use]
pub fn date_only(value: &str) -> String {
    value.chars().take(10).collect()
}

/// Join an amount/currency pair for display, falling back to the raw pair
/// when the currency code is unknown. A missing amount displays as "0.00".
#[must_use]
pub fn money(amount: Option<&Amount>) -> String {
    let Some(amount) = amount else {
        return "0.00".to_string();
    };
    let value = if amount.amount.is_empty() {
        "0.00"
    } else {
        amount.amount.as_str()
    };

    match iso::find(&amount.currency) {
        Some(code) => match Money::from_str(value, code) {
            Ok(money) => money.to_string(),
            Err(_) => format!("{value} {}", amount.currency),
        },
        None => format!("{value} {}", amount.currency).trim_end().to_string(),
    }
}

// -- Tests ----------------------------------------------------------------
