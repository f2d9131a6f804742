//! Document root plus the page-level state handlers read and write.

use crate::element::{self, Element};
use crate::layout::{self, LayoutResult};

/// Page address. The hash is stored without its leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub hash: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash: String::new(),
        }
    }

    /// Split `path#hash` into its parts.
    pub fn parse(url: &str) -> Self {
        match url.split_once('#') {
            Some((path, hash)) => Self {
                path: path.to_string(),
                hash: hash.to_string(),
            },
            None => Self::new(url),
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        self.hash = hash.strip_prefix('#').unwrap_or(&hash).to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
    pub location: Location,
    pub user_agent: String,
    /// Vertical scroll offset of the viewport, in lines.
    pub scroll_y: u32,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            location: Location::default(),
            user_agent: String::new(),
            scroll_y: 0,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        element::find_parent(&self.root, id)
    }

    /// Whether the element has an ancestor with the given tag.
    pub fn has_ancestor(&self, id: &str, tag: &str) -> bool {
        element::ancestors(&self.root, id)
            .is_some_and(|path| path.iter().any(|el| el.tag == tag))
    }

    /// All elements with the given tag, in document order.
    pub fn query_tag(&self, tag: &str) -> Vec<&Element> {
        self.all().into_iter().filter(|el| el.tag == tag).collect()
    }

    /// All elements carrying the given class, in document order.
    pub fn query_class(&self, class: &str) -> Vec<&Element> {
        self.all()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    fn all(&self) -> Vec<&Element> {
        let mut all = vec![&self.root];
        all.extend(element::descendants(&self.root));
        all
    }

    pub fn layout(&self) -> LayoutResult {
        layout::layout(&self.root)
    }

    /// Scroll the viewport, clamping at the top of the page.
    pub fn scroll_to(&mut self, y: i64) {
        self.scroll_y = y.clamp(0, u32::MAX as i64) as u32;
    }
}
