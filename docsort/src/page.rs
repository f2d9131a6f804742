//! Event routing for a whole page.

use std::collections::HashMap;

use docdom::{Document, Event, EventResult};

use crate::config::PageOptions;
use crate::error::{Error, Result};
use crate::rules::Rules;
use crate::tablesort::{self, SortDirection, Tablesort};
use crate::tabs::LinkedTabs;

/// Page behaviors: sortable tables and linked tabs.
///
/// # Example
///
/// ```
/// use docdom::{Document, Event, markdown};
/// use docsort::{Page, PageOptions};
///
/// let mut doc = markdown::parse("| Taille |\n|---|\n| 2 MiB |\n| 1 GiB |\n");
/// let mut page = Page::new(PageOptions::default()).unwrap();
/// page.handle(&mut doc, &Event::Ready);
/// assert_eq!(page.tables().count(), 1);
/// ```
#[derive(Debug)]
pub struct Page {
    options: PageOptions,
    rules: Rules,
    tables: HashMap<String, Tablesort>,
    tabs: LinkedTabs,
}

impl Page {
    pub fn new(options: PageOptions) -> Result<Self> {
        let tabs = LinkedTabs::new(options.tabs.clone())?;
        Ok(Self {
            options,
            rules: Rules::builtin(),
            tables: HashMap::new(),
            tabs,
        })
    }

    /// Use another column type registry. Applies to tables wired afterwards.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn table(&self, table_id: &str) -> Option<&Tablesort> {
        self.tables.get(table_id)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Tablesort> {
        self.tables.values()
    }

    pub fn tabs(&self) -> &LinkedTabs {
        &self.tabs
    }

    /// Sort a wired table by a column, as a click on its header would.
    pub fn sort(
        &mut self,
        document: &mut Document,
        table_id: &str,
        column: usize,
    ) -> Result<SortDirection> {
        let sorter = self
            .tables
            .get_mut(table_id)
            .ok_or_else(|| Error::UnknownTable(table_id.to_string()))?;
        sorter.sort_column(document, column)
    }

    pub fn handle(&mut self, document: &mut Document, event: &Event) -> EventResult {
        match event {
            Event::Ready => self.on_ready(document),
            Event::Click { target } => self.on_click(document, target),
            Event::Change { target } => self.tabs.on_change(document, target),
        }
    }

    /// Tables the sorter applies to, in document order.
    fn candidate_tables(&self, document: &Document) -> Vec<String> {
        let options = &self.options.sort;
        document
            .query_tag("table")
            .into_iter()
            .filter(|table| !options.skip_classed || table.classes.is_empty())
            .filter(|table| {
                options
                    .scope_tag
                    .as_deref()
                    .is_none_or(|tag| document.has_ancestor(&table.id, tag))
            })
            .map(|table| table.id.clone())
            .collect()
    }

    fn on_ready(&mut self, document: &mut Document) -> EventResult {
        // Tables replaced by a navigation lose their instance
        self.tables
            .retain(|id, _| tablesort::is_wired(document, id));

        let mut wired = 0;
        for table_id in self.candidate_tables(document) {
            if tablesort::is_wired(document, &table_id) {
                continue;
            }
            match Tablesort::wire(document, &table_id, &self.rules, &self.options.sort) {
                Ok(sorter) => {
                    self.tables.insert(table_id, sorter);
                    wired += 1;
                }
                Err(e) => log::debug!("[page] skipping table {table_id}: {e}"),
            }
        }
        log::debug!(
            "[page] ready: wired {wired} tables, {} total",
            self.tables.len()
        );

        let tabs = self.tabs.restore(document);
        if wired > 0 || tabs.is_consumed() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn on_click(&mut self, document: &mut Document, target: &str) -> EventResult {
        let Some(element) = document.get(target) else {
            log::debug!("[page] click on unknown element {target}");
            return EventResult::Ignored;
        };

        if element.tag == "label" {
            return match element.get_attr("for").map(str::to_string) {
                Some(input_id) => self.tabs.on_change(document, &input_id),
                None => EventResult::Ignored,
            };
        }

        let Some((table_id, column)) = self
            .tables
            .iter()
            .find_map(|(id, sorter)| sorter.column_of(target).map(|column| (id.clone(), column)))
        else {
            return EventResult::Ignored;
        };

        match self.sort(document, &table_id, column) {
            Ok(_) => EventResult::Consumed,
            Err(e) => {
                log::debug!("[page] click on {target} ignored: {e}");
                EventResult::Ignored
            }
        }
    }
}
