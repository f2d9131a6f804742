//! Reader and writer for the Markdown subset documentation pages are
//! generated in.
//!
//! Supported blocks:
//! - ATX headings (`# Title`)
//! - paragraphs
//! - pipe tables, with `{ key="value" }` attribute lists on header cells
//! - tabbed blocks (`=== "Label"`, `===!` to start a new set, `===+` to
//!   select a tab), their content indented by four spaces
//!
//! Everything is wrapped in an `article` element. Tables get the IDs
//! `table-1`, `table-2`, ... and their header cells `table-N-col-I`. Tab
//! inputs get `__tabbed_S_I` (both 1-based), which is what URL fragments
//! refer to.

mod attrs;
mod inline;
mod parse;
mod render;

pub use attrs::{parse_attr_list, split_attr_list};
pub use inline::visible_text;
pub use parse::parse;
pub use render::render;

/// Data key holding a cell's raw Markdown when it differs from its text.
pub const SOURCE_KEY: &str = "source";

/// Data key holding a column's alignment (`left`, `center`, `right`).
pub const ALIGN_KEY: &str = "align";
