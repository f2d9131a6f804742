//! Column types and their registry.
//!
//! A column type recognizes one kind of cell value and orders two cells of
//! that kind. Types are tried in registration order and the first one that
//! accepts every sampled cell of a column is used for it. Columns nothing
//! accepts fall back to case-insensitive text ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::normalize::{compare_keys, parse_datetime, parse_filesize, parse_number};

/// One kind of cell value.
///
/// `compare` follows the descending convention: it returns `Less` when `a`
/// belongs before `b` in a descending sort, i.e. it compares `b` against
/// `a`. Ascending sorts use the reversed comparator.
pub trait ColumnType: Send + Sync {
    fn name(&self) -> &str;

    fn matches(&self, text: &str) -> bool;

    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Plain numbers, with spaces as grouping and a comma or dot as decimal mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberColumn;

impl ColumnType for NumberColumn {
    fn name(&self) -> &str {
        "number"
    }

    fn matches(&self, text: &str) -> bool {
        parse_number(text).is_some()
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_keys(parse_number(a), parse_number(b))
    }
}

/// Human file sizes in powers of 1024 (`512 KiB`, `2.0 Mo`, `930B`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSizeColumn;

impl ColumnType for FileSizeColumn {
    fn name(&self) -> &str {
        "filesize"
    }

    fn matches(&self, text: &str) -> bool {
        parse_filesize(text).is_some()
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_keys(parse_filesize(a), parse_filesize(b))
    }
}

/// `DD/MM/YYYY HH:MM:SS` timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateColumn;

impl ColumnType for DateColumn {
    fn name(&self) -> &str {
        "date"
    }

    fn matches(&self, text: &str) -> bool {
        parse_datetime(text).is_some()
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_keys(parse_datetime(a), parse_datetime(b))
    }
}

/// Case-insensitive text. Matches anything; used when nothing else does.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalColumn;

impl ColumnType for LexicalColumn {
    fn name(&self) -> &str {
        "default"
    }

    fn matches(&self, _text: &str) -> bool {
        true
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        b.cmp(&a)
    }
}

type MatchFn = Box<dyn Fn(&str) -> bool + Send + Sync>;
type CompareFn = Box<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// A column type assembled from closures.
///
/// # Example
///
/// ```
/// use docsort::rules::{CustomColumn, Rules};
///
/// let mut rules = Rules::builtin();
/// rules.extend(CustomColumn::new(
///     "version",
///     |text| text.starts_with('v'),
///     |a, b| b.cmp(a),
/// ));
/// assert_eq!(rules.names(), vec!["number", "filesize", "date", "version"]);
/// ```
pub struct CustomColumn {
    name: String,
    matches: MatchFn,
    compare: CompareFn,
}

impl CustomColumn {
    pub fn new(
        name: impl Into<String>,
        matches: impl Fn(&str) -> bool + Send + Sync + 'static,
        compare: impl Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            matches: Box::new(matches),
            compare: Box::new(compare),
        }
    }
}

impl fmt::Debug for CustomColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomColumn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ColumnType for CustomColumn {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, text: &str) -> bool {
        (self.matches)(text)
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        (self.compare)(a, b)
    }
}

/// Ordered registry of column types. Registration order is priority order.
#[derive(Clone)]
pub struct Rules {
    rules: Vec<Arc<dyn ColumnType>>,
    fallback: Arc<dyn ColumnType>,
}

impl Rules {
    /// A registry with no types; every column sorts as text.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Arc::new(LexicalColumn),
        }
    }

    /// Numbers, then file sizes, then dates.
    pub fn builtin() -> Self {
        let mut rules = Self::empty();
        rules
            .extend(NumberColumn)
            .extend(FileSizeColumn)
            .extend(DateColumn);
        rules
    }

    /// Register a type after all existing ones.
    pub fn extend(&mut self, rule: impl ColumnType + 'static) -> &mut Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn fallback(&self) -> Arc<dyn ColumnType> {
        Arc::clone(&self.fallback)
    }

    /// Look a type up by name. The fallback answers to its own name.
    pub fn by_name(&self, name: &str) -> Option<Arc<dyn ColumnType>> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .find(|rule| rule.name() == name)
            .cloned()
    }

    /// First type accepting every sample, or the fallback.
    ///
    /// An empty sample gives the fallback.
    pub fn detect(&self, samples: &[&str]) -> Arc<dyn ColumnType> {
        if samples.is_empty() {
            return self.fallback();
        }
        self.rules
            .iter()
            .find(|rule| samples.iter().all(|sample| rule.matches(sample)))
            .cloned()
            .unwrap_or_else(|| self.fallback())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("rules", &self.names())
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_order() {
        let rules = Rules::builtin();
        assert_eq!(rules.detect(&["42", "1 234,5"]).name(), "number");
        assert_eq!(rules.detect(&["2 MiB", "512 KiB"]).name(), "filesize");
        assert_eq!(rules.detect(&["01/02/2024 10:00:00"]).name(), "date");
        assert_eq!(rules.detect(&["Anglais", "Allemand"]).name(), "default");
    }

    #[test]
    fn test_every_sample_must_match() {
        let rules = Rules::builtin();
        assert_eq!(rules.detect(&["42", "2 MiB"]).name(), "default");
        assert_eq!(rules.detect(&["2 MiB", "930B", "-"]).name(), "default");
    }

    #[test]
    fn test_empty_sample_is_lexical() {
        assert_eq!(Rules::builtin().detect(&[]).name(), "default");
    }

    #[test]
    fn test_by_name() {
        let rules = Rules::builtin();
        assert_eq!(rules.by_name("date").map(|r| r.name().to_string()), Some("date".into()));
        assert!(rules.by_name("default").is_some());
        assert!(rules.by_name("nope").is_none());
    }

    #[test]
    fn test_custom_rule_runs_after_builtins() {
        let mut rules = Rules::builtin();
        rules.extend(CustomColumn::new("any", |_| true, |a, b| a.len().cmp(&b.len())));
        // Builtins still win for their own values
        assert_eq!(rules.detect(&["42"]).name(), "number");
        assert_eq!(rules.detect(&["abc"]).name(), "any");
    }

    #[test]
    fn test_lexical_is_case_insensitive_descending() {
        let lexical = LexicalColumn;
        assert_eq!(lexical.compare("apple", "Banana"), Ordering::Greater);
        assert_eq!(lexical.compare(" APPLE", "apple"), Ordering::Equal);
    }

    #[test]
    fn test_rules_never_claim_each_other() {
        let samples = ["42", "2 MiB", "01/02/2024 10:00:00"];
        let types: [&dyn ColumnType; 3] = [&NumberColumn, &FileSizeColumn, &DateColumn];
        for (i, sample) in samples.iter().enumerate() {
            for (j, rule) in types.iter().enumerate() {
                assert_eq!(rule.matches(sample), i == j, "{} vs {sample}", rule.name());
            }
        }
    }
}
