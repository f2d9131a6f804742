//! Typed column sorting and linked tabs for documentation pages.
//!
//! Works on a [`docdom::Document`]: tables inside the page body become
//! sortable by clicking their headers, with the comparator picked per column
//! from the registered column types (numbers, file sizes, dates, then plain
//! text), and tabbed blocks sharing a label stay selected together.

pub mod config;
pub mod error;
pub mod format;
pub mod normalize;
pub mod page;
pub mod rules;
pub mod tablesort;
pub mod tabs;

pub use config::{PageOptions, SortOptions, TabOptions};
pub use error::{Error, Result};
pub use page::Page;
pub use rules::{ColumnType, Rules};
pub use tablesort::{SortDirection, Tablesort};
pub use tabs::LinkedTabs;
