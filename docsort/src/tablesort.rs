//! Sortable tables.
//!
//! A [`Tablesort`] is wired to one table of a document. Wiring picks a column
//! type for every header cell, marks the headers clickable and applies the
//! default sort if a header asks for one. Each header click toggles that
//! column's direction and reorders the body rows in place.
//!
//! Header attributes:
//! - `data-sort-method="<name>"` forces a column type; `none` disables sorting
//! - `data-sort-default` sorts by that column on wiring
//! - `aria-sort` holds the current direction and is rewritten on every sort
//!
//! Cells may carry `data-sort` to sort by a value other than their text, and
//! body rows with `data-sort-method="none"` keep their position.

use std::fmt;
use std::sync::Arc;

use docdom::{Document, Element, table};

use crate::config::SortOptions;
use crate::error::{Error, Result};
use crate::rules::{ColumnType, Rules};

/// Data key marking a table as wired.
pub const WIRED_KEY: &str = "tablesort";

/// Sort direction of a column, as written to `aria-sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "ascending" => Some(Self::Ascending),
            "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

struct Column {
    header_id: String,
    /// `None` for columns with `data-sort-method="none"`.
    rule: Option<Arc<dyn ColumnType>>,
}

/// Sort state and detected column types of one wired table.
pub struct Tablesort {
    table_id: String,
    header_row_id: String,
    columns: Vec<Column>,
    current: Option<usize>,
    default_direction: SortDirection,
}

impl fmt::Debug for Tablesort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tablesort")
            .field("table_id", &self.table_id)
            .field("columns", &self.column_types())
            .field("current", &self.current)
            .finish()
    }
}

/// Sort value of a cell: its `data-sort` attribute, else its text.
pub fn cell_text(cell: &Element) -> String {
    match cell.get_attr("data-sort") {
        Some(value) => value.trim().to_string(),
        None => cell.inner_text().trim().to_string(),
    }
}

fn is_pinned(row: &Element) -> bool {
    row.get_attr("data-sort-method") == Some("none")
}

/// Whether `table_id` already carries the wiring marker.
pub fn is_wired(document: &Document, table_id: &str) -> bool {
    document
        .get(table_id)
        .is_some_and(|t| t.get_data(WIRED_KEY).is_some())
}

impl Tablesort {
    /// Wire a table: detect column types, mark headers clickable and apply
    /// the default sort.
    pub fn wire(
        document: &mut Document,
        table_id: &str,
        rules: &Rules,
        options: &SortOptions,
    ) -> Result<Self> {
        let element = document
            .get(table_id)
            .ok_or_else(|| Error::UnknownTable(table_id.to_string()))?;
        let header = table::header_row(element)
            .ok_or_else(|| Error::MissingHeader(table_id.to_string()))?;

        let body_rows: Vec<&Element> = table::bodies(element)
            .into_iter()
            .flat_map(table::rows)
            .filter(|row| row.id != header.id && !is_pinned(row))
            .collect();

        let mut columns = Vec::new();
        let mut default_column = None;
        for (index, th) in table::cells(header).enumerate() {
            let rule = match th.get_attr("data-sort-method") {
                Some("none") => None,
                Some(method) => Some(rules.by_name(method).unwrap_or_else(|| {
                    log::debug!(
                        "[tablesort] {table_id}: unknown sort method '{method}', sorting as text"
                    );
                    rules.fallback()
                })),
                None => {
                    let samples: Vec<String> = body_rows
                        .iter()
                        .filter_map(|row| table::cell(row, index))
                        .map(cell_text)
                        .filter(|text| !text.is_empty())
                        .take(options.sample_size)
                        .collect();
                    let samples: Vec<&str> = samples.iter().map(String::as_str).collect();
                    Some(rules.detect(&samples))
                }
            };
            if rule.is_some() && th.has_attr("data-sort-default") && default_column.is_none() {
                default_column = Some(index);
            }
            columns.push(Column {
                header_id: th.id.clone(),
                rule,
            });
        }

        let mut sorter = Self {
            table_id: table_id.to_string(),
            header_row_id: header.id.clone(),
            columns,
            current: None,
            default_direction: SortDirection::from_descending(options.descending),
        };

        for column in &sorter.columns {
            if column.rule.is_some()
                && let Some(th) = document.get_mut(&column.header_id)
            {
                th.clickable = true;
            }
        }
        if let Some(table) = document.get_mut(table_id) {
            table.data.insert(WIRED_KEY.to_string(), "wired".to_string());
        }

        log::debug!(
            "[tablesort] wired {} with column types {:?}",
            table_id,
            sorter.column_types()
        );

        if let Some(column) = default_column {
            sorter.sort_column(document, column)?;
        }

        Ok(sorter)
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Name of the column type in use per column (`None` when unsortable).
    pub fn column_types(&self) -> Vec<Option<&str>> {
        self.columns
            .iter()
            .map(|c| c.rule.as_ref().map(|rule| rule.name()))
            .collect()
    }

    /// Column index of a header cell.
    pub fn column_of(&self, header_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.header_id == header_id)
    }

    /// Currently sorted column.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Current direction of a column, read from its header.
    pub fn direction(&self, document: &Document, column: usize) -> Option<SortDirection> {
        let column = self.columns.get(column)?;
        document
            .get(&column.header_id)
            .and_then(|th| th.get_attr("aria-sort"))
            .and_then(SortDirection::from_attr)
    }

    /// Sort by a column as a header click would.
    ///
    /// Clicking the sorted column again reverses it. Clicking another column
    /// clears the previous header's direction and starts at the default one.
    pub fn sort_column(&mut self, document: &mut Document, column: usize) -> Result<SortDirection> {
        let rule = self.rule(column)?;

        if let Some(previous) = self.current.filter(|&c| c != column)
            && let Some(th) = document.get_mut(&self.columns[previous].header_id)
        {
            th.remove_attr("aria-sort");
        }

        let direction = match self.direction(document, column) {
            Some(direction) => direction.toggled(),
            None => self.default_direction,
        };
        if let Some(th) = document.get_mut(&self.columns[column].header_id) {
            th.set_attr("aria-sort", direction.as_attr());
        }
        self.current = Some(column);

        self.apply(document, column, rule.as_ref(), direction)?;
        log::debug!(
            "[tablesort] sorted {} by column {} as {} ({})",
            self.table_id,
            column,
            rule.name(),
            direction
        );
        Ok(direction)
    }

    /// Replace the detected type of a column with a registered one.
    pub fn set_column_type(&mut self, column: usize, name: &str, rules: &Rules) -> Result<()> {
        let rule = rules
            .by_name(name)
            .ok_or_else(|| Error::UnknownColumnType(name.to_string()))?;
        let entry = self.columns.get_mut(column).ok_or_else(|| Error::ColumnOutOfRange {
            table: self.table_id.clone(),
            column,
        })?;
        entry.rule = Some(rule);
        Ok(())
    }

    /// Re-apply the current sort, e.g. after rows were added.
    pub fn refresh(&self, document: &mut Document) -> Result<()> {
        let Some(column) = self.current else {
            return Ok(());
        };
        let rule = self.rule(column)?;
        let direction = self.direction(document, column).unwrap_or(self.default_direction);
        self.apply(document, column, rule.as_ref(), direction)
    }

    fn rule(&self, column: usize) -> Result<Arc<dyn ColumnType>> {
        let entry = self.columns.get(column).ok_or_else(|| Error::ColumnOutOfRange {
            table: self.table_id.clone(),
            column,
        })?;
        entry.rule.clone().ok_or_else(|| Error::NotSortable {
            table: self.table_id.clone(),
            column,
        })
    }

    fn apply(
        &self,
        document: &mut Document,
        column: usize,
        rule: &dyn ColumnType,
        direction: SortDirection,
    ) -> Result<()> {
        let body_ids = document
            .get(&self.table_id)
            .map(table::body_ids)
            .ok_or_else(|| Error::UnknownTable(self.table_id.clone()))?;

        for body_id in body_ids {
            let Some(children) = document
                .get_mut(&body_id)
                .and_then(|body| body.child_nodes_mut())
            else {
                continue;
            };
            let row_count = children.iter().filter(|el| el.tag == "tr").count();
            if row_count < 2 {
                continue;
            }

            // Header rows, pinned rows and non-row children keep their slot.
            let mut slots: Vec<Option<Element>> = Vec::with_capacity(children.len());
            let mut movable: Vec<(String, Element)> = Vec::new();
            for child in children.drain(..) {
                if child.tag == "tr" && child.id != self.header_row_id && !is_pinned(&child) {
                    let text = table::cell(&child, column).map(cell_text).unwrap_or_default();
                    movable.push((text, child));
                    slots.push(None);
                } else {
                    slots.push(Some(child));
                }
            }

            // `sort_by` is stable, so equal keys keep their original order.
            match direction {
                SortDirection::Descending => movable.sort_by(|a, b| rule.compare(&a.0, &b.0)),
                SortDirection::Ascending => movable.sort_by(|a, b| rule.compare(&b.0, &a.0)),
            }

            let mut sorted = movable.into_iter().map(|(_, row)| row);
            children.extend(slots.into_iter().filter_map(|slot| slot.or_else(|| sorted.next())));
        }

        Ok(())
    }
}
