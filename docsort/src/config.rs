//! Page behavior options

/// User agents that get the second tab selected by default.
pub const DEFAULT_MOBILE_PATTERN: &str =
    "Android|webOS|iPhone|iPad|iPod|BlackBerry|Windows Phone";

/// Options for table sorting.
///
/// # Example
///
/// ```
/// use docsort::SortOptions;
///
/// let options = SortOptions::default()
///     .with_descending(false)
///     .with_sample_size(5);
/// ```
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// Direction of the first sort on a column.
    ///
    /// Default: descending
    pub descending: bool,

    /// How many non-empty cells are checked when detecting a column's type.
    ///
    /// Default: 3
    pub sample_size: usize,

    /// Only tables inside an element with this tag are made sortable.
    /// `None` accepts tables anywhere.
    ///
    /// Default: `article`
    pub scope_tag: Option<String>,

    /// Skip tables that carry a class (styled tables are not data tables).
    ///
    /// Default: true
    pub skip_classed: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            descending: true,
            sample_size: 3,
            scope_tag: Some("article".to_string()),
            skip_classed: true,
        }
    }
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    /// Sets the detection sample size (at least 1).
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size.max(1);
        self
    }

    pub fn with_scope_tag(mut self, tag: impl Into<String>) -> Self {
        self.scope_tag = Some(tag.into());
        self
    }

    /// Accept tables anywhere in the document.
    pub fn without_scope(mut self) -> Self {
        self.scope_tag = None;
        self
    }

    pub fn with_skip_classed(mut self, skip: bool) -> Self {
        self.skip_classed = skip;
        self
    }
}

/// Options for linked tabs.
#[derive(Debug, Clone)]
pub struct TabOptions {
    /// Select same-labeled tabs across all tabbed sets.
    ///
    /// Default: true
    pub link: bool,

    /// Regex matched against the user agent to pick the mobile default tab.
    pub mobile_pattern: String,
}

impl Default for TabOptions {
    fn default() -> Self {
        Self {
            link: true,
            mobile_pattern: DEFAULT_MOBILE_PATTERN.to_string(),
        }
    }
}

impl TabOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(mut self, link: bool) -> Self {
        self.link = link;
        self
    }

    pub fn with_mobile_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.mobile_pattern = pattern.into();
        self
    }
}

/// All page behavior options.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub sort: SortOptions,
    pub tabs: TabOptions,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort: SortOptions) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_tabs(mut self, tabs: TabOptions) -> Self {
        self.tabs = tabs;
        self
    }
}
