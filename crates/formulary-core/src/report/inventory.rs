//! Inventory table.

use super::{display_width, rule, EMPTY};
use crate::models::InventoryItem;

const HEADINGS: [&str; 4] = ["Name", "Strength (mg)", "Pack Size", "Total Packs"];

/// Render inventory items as a four-column table.
///
/// Names are left-aligned and numbers right-aligned.
pub fn render_inventory(inventory: &[InventoryItem]) -> String {
    let cells: Vec<[String; 4]> = inventory
        .iter()
        .map(|item| {
            [
                item.name.clone(),
                item.strength.to_string(),
                item.pack_size.to_string(),
                item.total_packs.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADINGS.map(|heading| display_width(heading).max(display_width(EMPTY)));
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let line = rule(&widths);
    let header = format_row(&HEADINGS, &widths);
    let body = if cells.is_empty() {
        format_row(&[EMPTY; 4], &widths)
    } else {
        cells
            .iter()
            .map(|row| format_row(row, &widths))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("\n{line}\n{header}\n{line}\n{body}\n{line}\n")
}

fn format_row<S: AsRef<str>>(cells: &[S; 4], widths: &[usize; 4]) -> String {
    format!(
        "| {:<w0$} | {:>w1$} | {:>w2$} | {:>w3$} |",
        cells[0].as_ref(),
        cells[1].as_ref(),
        cells[2].as_ref(),
        cells[3].as_ref(),
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inventory() {
        let table = render_inventory(&[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "+---------+---------------+-----------+-------------+");
        assert_eq!(lines[2], "| Name    | Strength (mg) | Pack Size | Total Packs |");
        assert_eq!(lines[4], "| (empty) |       (empty) |   (empty) |     (empty) |");
    }

    #[test]
    fn test_rows_are_aligned() {
        let inventory = vec![
            InventoryItem::new("Paracetamol", 500, 30, 10),
            InventoryItem::new("Ibuprofen", 200, 24, 3),
        ];
        let table = render_inventory(&inventory);

        assert!(table.contains("| Paracetamol |           500 |        30 |          10 |"));
        assert!(table.contains("| Ibuprofen   |           200 |        24 |           3 |"));
    }
}
