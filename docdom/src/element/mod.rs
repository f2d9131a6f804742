mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_nodes() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the direct parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    for child in root.child_nodes() {
        if child.id == id {
            return Some(root);
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }

    None
}

/// Ancestors of the element with the given ID, outermost first.
///
/// Returns `None` if the element is not in the tree. The root itself has no
/// ancestors.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(Vec::new());
    }

    for child in root.child_nodes() {
        if let Some(mut path) = ancestors(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// All descendants of `root` in document order, excluding `root`.
pub fn descendants(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    collect_descendants(root, &mut out);
    out
}

fn collect_descendants<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in element.child_nodes() {
        out.push(child);
        collect_descendants(child, out);
    }
}
