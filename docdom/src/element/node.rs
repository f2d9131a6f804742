use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Direction;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,

    // State
    /// Checked state of radio/checkbox inputs.
    pub checked: bool,
    /// Hidden elements take no space in layout.
    pub hidden: bool,
    /// Whether clicks on this element are routed to a handler.
    pub clickable: bool,

    // Custom data storage (wiring markers, markdown source, etc.)
    pub data: HashMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            content: Content::None,
            direction: Direction::Column,
            checked: false,
            hidden: false,
            clickable: false,
            data: HashMap::new(),
        }
    }

    /// A text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new("span")
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn article() -> Self {
        Self::new("article")
    }

    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Self::new(format!("h{}", level.clamp(1, 6))).text_content(content)
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new("p").text_content(content)
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr").direction(Direction::Row)
    }

    pub fn th(content: impl Into<String>) -> Self {
        Self::new("th").text_content(content)
    }

    pub fn td(content: impl Into<String>) -> Self {
        Self::new("td").text_content(content)
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn label(content: impl Into<String>) -> Self {
        Self::new("label").text_content(content)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // State
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Content
    pub fn text_content(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, empty for text and empty elements.
    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_nodes_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Concatenated text of this element and all its descendants.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(s) => out.push_str(s),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
