//! Linked tabbed content.
//!
//! Selecting a tab selects every tab with the same label in the other
//! tabbed sets of the page, keeping the clicked label where it was on
//! screen. On page load a tab named by the URL fragment is restored, or a
//! default tab is picked for the device.

use std::cell::Cell;

use docdom::{Document, Element, EventResult};
use regex::Regex;

use crate::config::TabOptions;
use crate::error::{Error, Result};

const SET_CLASS: &str = "tabbed-set";
const LABELS_CLASS: &str = "tabbed-labels";
const CONTENT_CLASS: &str = "tabbed-content";

/// Held while a synchronization runs. Changes triggered by the
/// synchronization itself see the flag set and do not sync again.
struct SyncGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> SyncGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[derive(Debug)]
pub struct LinkedTabs {
    options: TabOptions,
    mobile: Regex,
    syncing: Cell<bool>,
}

/// IDs of every tab input on the page, in document order.
pub fn tab_inputs(document: &Document) -> Vec<String> {
    document
        .query_class(SET_CLASS)
        .into_iter()
        .flat_map(|set| set.child_nodes())
        .filter(|el| el.tag == "input")
        .map(|el| el.id.clone())
        .collect()
}

fn is_tab_input(document: &Document, id: &str) -> bool {
    document.get(id).is_some_and(|el| el.tag == "input")
        && document.parent_of(id).is_some_and(|p| p.has_class(SET_CLASS))
}

/// The label pointing at a tab input.
fn label_for<'a>(document: &'a Document, input_id: &str) -> Option<&'a Element> {
    document
        .query_tag("label")
        .into_iter()
        .find(|label| label.get_attr("for") == Some(input_id))
}

/// Check `input_id` within its set and show its panel; uncheck and hide
/// the others.
pub fn select(document: &mut Document, input_id: &str) -> Result<()> {
    if !is_tab_input(document, input_id) {
        return Err(Error::NotATab(input_id.to_string()));
    }
    let set_id = document
        .parent_of(input_id)
        .map(|set| set.id.clone())
        .ok_or_else(|| Error::UnknownElement(input_id.to_string()))?;
    let set = document
        .get_mut(&set_id)
        .and_then(Element::child_nodes_mut)
        .ok_or_else(|| Error::UnknownElement(set_id.clone()))?;

    let mut selected = None;
    for (index, child) in set.iter_mut().filter(|el| el.tag == "input").enumerate() {
        child.checked = child.id == input_id;
        if child.checked {
            selected = Some(index);
        }
    }

    let panels = set
        .iter_mut()
        .filter(|el| el.has_class(CONTENT_CLASS))
        .filter_map(|content| content.child_nodes_mut())
        .flat_map(|panels| panels.iter_mut());
    for (index, panel) in panels.enumerate() {
        panel.hidden = Some(index) != selected;
    }

    Ok(())
}

impl LinkedTabs {
    pub fn new(options: TabOptions) -> Result<Self> {
        let mobile = Regex::new(&options.mobile_pattern)?;
        Ok(Self {
            options,
            mobile,
            syncing: Cell::new(false),
        })
    }

    pub fn is_mobile(&self, user_agent: &str) -> bool {
        self.mobile.is_match(user_agent)
    }

    /// Whether a synchronization is in progress.
    pub fn is_syncing(&self) -> bool {
        self.syncing.get()
    }

    /// A tab input was selected, by the user or by a synchronization.
    ///
    /// The input is always selected. Unless a synchronization is already
    /// running, every other input labeled the same is then selected through
    /// this same entry point, and the page is scrolled so the label stays at
    /// the same position in the viewport.
    pub fn on_change(&self, document: &mut Document, input_id: &str) -> EventResult {
        if let Err(e) = select(document, input_id) {
            log::debug!("[tabs] ignoring change of {input_id}: {e}");
            return EventResult::Ignored;
        }

        if !self.options.link {
            return EventResult::Consumed;
        }
        let Some(_guard) = SyncGuard::acquire(&self.syncing) else {
            log::trace!("[tabs] {input_id} selected during sync");
            return EventResult::Consumed;
        };

        let Some((label_id, text)) =
            label_for(document, input_id).map(|l| (l.id.clone(), l.inner_text()))
        else {
            return EventResult::Consumed;
        };

        let offset = document
            .layout()
            .get(&label_id)
            .map(|block| block.top as i64 - document.scroll_y as i64);

        let linked: Vec<String> = document
            .query_tag("label")
            .into_iter()
            .filter(|label| label.id != label_id && label.inner_text() == text)
            .filter_map(|label| label.get_attr("for"))
            .filter(|id| document.get(id).is_some_and(|input| !input.checked))
            .map(str::to_string)
            .collect();
        log::debug!("[tabs] syncing '{text}' to {} linked tabs", linked.len());

        for id in &linked {
            self.on_change(document, id);
        }

        if let Some(offset) = offset
            && let Some(block) = document.layout().get(&label_id)
        {
            document.scroll_to(block.top as i64 - offset);
        }

        EventResult::Consumed
    }

    /// Pick the initial tabs when a page loads.
    ///
    /// A fragment naming a tab input selects that tab and scrolls its label
    /// into view. Without a fragment the first tab of the page is selected,
    /// or the second on mobile devices. A fragment naming anything else
    /// leaves the markup's selection alone.
    pub fn restore(&self, document: &mut Document) -> EventResult {
        let inputs = tab_inputs(document);
        if inputs.is_empty() {
            return EventResult::Ignored;
        }

        let hash = document.location.hash.clone();
        if !hash.is_empty() {
            if !inputs.contains(&hash) {
                log::debug!("[tabs] fragment '{hash}' is not a tab, keeping defaults");
                return EventResult::Ignored;
            }
            let result = self.on_change(document, &hash);
            let label_top = label_for(document, &hash)
                .map(|l| l.id.clone())
                .and_then(|id| document.layout().get(&id).map(|block| block.top));
            if let Some(top) = label_top {
                document.scroll_to(top as i64);
            }
            return result;
        }

        let pick = if self.is_mobile(&document.user_agent) {
            inputs.get(1).or(inputs.first())
        } else {
            inputs.first()
        };
        match pick {
            Some(id) => self.on_change(document, id),
            None => EventResult::Ignored,
        }
    }
}
