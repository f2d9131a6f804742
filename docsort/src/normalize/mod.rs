//! Conversion of cell text into comparable keys.
//!
//! Each normalizer returns `None` for text it cannot read. `None` is never a
//! valid key, so a failed parse cannot be mistaken for a real value and a
//! rule built on one normalizer never claims another rule's cells.

mod date;
mod filesize;
mod number;

use std::cmp::Ordering;

pub use date::parse_datetime;
pub use filesize::{magnitude, parse_filesize};
pub use number::parse_number;

/// Compare two parsed keys in the descending convention: `b` against `a`.
///
/// Unparseable keys rank below every parsed key and tie with each other,
/// which keeps the ordering total.
pub fn compare_keys<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
