//! Structural helpers for `table` elements.
//!
//! A table is `table > (thead?, tbody+)`, each section holding `tr` rows of
//! `th`/`td` cells. Rows placed directly under `table` are treated as one
//! implicit body.

use crate::element::Element;

pub fn is_cell(element: &Element) -> bool {
    element.tag == "th" || element.tag == "td"
}

/// The `thead` section, if any.
pub fn head(table: &Element) -> Option<&Element> {
    table.child_nodes().iter().find(|el| el.tag == "thead")
}

/// Rows of a section (or of a table without sections).
pub fn rows(section: &Element) -> impl Iterator<Item = &Element> {
    section.child_nodes().iter().filter(|el| el.tag == "tr")
}

/// Cells of a row.
pub fn cells(row: &Element) -> impl Iterator<Item = &Element> {
    row.child_nodes().iter().filter(|el| is_cell(el))
}

pub fn cell(row: &Element, index: usize) -> Option<&Element> {
    cells(row).nth(index)
}

/// Position of a cell among its row's cells.
pub fn cell_index(row: &Element, cell_id: &str) -> Option<usize> {
    cells(row).position(|el| el.id == cell_id)
}

/// The row whose cells act as sort headers.
///
/// The last `thead` row when there is a head, otherwise the first row of
/// the table.
pub fn header_row(table: &Element) -> Option<&Element> {
    if let Some(head) = head(table) {
        if let Some(row) = rows(head).last() {
            return Some(row);
        }
    }
    bodies(table).into_iter().flat_map(rows).next()
}

/// Body sections. A table with bare rows is its own single body.
pub fn bodies(table: &Element) -> Vec<&Element> {
    let bodies: Vec<_> = table
        .child_nodes()
        .iter()
        .filter(|el| el.tag == "tbody")
        .collect();
    if bodies.is_empty() && rows(table).next().is_some() {
        vec![table]
    } else {
        bodies
    }
}

/// IDs of the body sections, in order.
pub fn body_ids(table: &Element) -> Vec<String> {
    bodies(table).into_iter().map(|el| el.id.clone()).collect()
}

/// Whether the table has a `thead` with at least one row.
pub fn has_head_rows(table: &Element) -> bool {
    head(table).is_some_and(|head| rows(head).next().is_some())
}
