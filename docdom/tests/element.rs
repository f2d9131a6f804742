use docdom::element::{ancestors, descendants, find_element, find_element_mut, find_parent};
use docdom::{table, Document, Element, Event, Location};

fn sample_table() -> Element {
    Element::article().id("article").child(
        Element::table()
            .id("files")
            .child(
                Element::thead().child(
                    Element::tr()
                        .id("head")
                        .child(Element::th("Name").id("col-name"))
                        .child(Element::th("Size").id("col-size")),
                ),
            )
            .child(
                Element::tbody()
                    .id("body")
                    .child(
                        Element::tr()
                            .id("r1")
                            .child(Element::td("a.apkg"))
                            .child(Element::td("2 Mo")),
                    )
                    .child(
                        Element::tr()
                            .id("r2")
                            .child(Element::td("b.apkg"))
                            .child(Element::td("512 Ko")),
                    ),
            ),
    )
}

// ============================================================================
// Tree Queries
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = sample_table();
    assert_eq!(find_element(&root, "col-size").map(|e| e.inner_text()), Some("Size".to_string()));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = sample_table();
    if let Some(th) = find_element_mut(&mut root, "col-name") {
        th.set_attr("aria-sort", "descending");
    }
    assert_eq!(
        find_element(&root, "col-name").and_then(|e| e.get_attr("aria-sort")),
        Some("descending")
    );
}

#[test]
fn test_find_parent_and_ancestors() {
    let root = sample_table();
    assert_eq!(find_parent(&root, "r1").map(|e| e.id.as_str()), Some("body"));
    assert!(find_parent(&root, "article").is_none());

    let path = ancestors(&root, "col-name").unwrap();
    let tags: Vec<&str> = path.iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec!["article", "table", "thead", "tr"]);
}

#[test]
fn test_descendants_in_document_order() {
    let root = sample_table();
    let ids: Vec<&str> = descendants(&root)
        .into_iter()
        .filter(|e| e.tag == "tr")
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["head", "r1", "r2"]);
}

#[test]
fn test_inner_text_concatenates_descendants() {
    let row = Element::tr().child(Element::td("a")).child(Element::td("b"));
    assert_eq!(row.inner_text(), "ab");
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::td("x");
    let b = Element::td("x");
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("td-"));
}

#[test]
fn test_class_is_not_duplicated() {
    let el = Element::div().class("tabbed-set").class("tabbed-set");
    assert_eq!(el.classes, vec!["tabbed-set".to_string()]);
}

// ============================================================================
// Table Helpers
// ============================================================================

#[test]
fn test_header_row_prefers_thead() {
    let root = sample_table();
    let t = find_element(&root, "files").unwrap();
    assert_eq!(table::header_row(t).map(|r| r.id.as_str()), Some("head"));
    assert!(table::has_head_rows(t));
    assert_eq!(table::body_ids(t), vec!["body".to_string()]);
}

#[test]
fn test_table_without_sections_is_its_own_body() {
    let t = Element::table()
        .id("bare")
        .child(Element::tr().id("first").child(Element::td("x")))
        .child(Element::tr().child(Element::td("y")));
    assert_eq!(table::header_row(&t).map(|r| r.id.as_str()), Some("first"));
    assert_eq!(table::body_ids(&t), vec!["bare".to_string()]);
    assert!(!table::has_head_rows(&t));
}

#[test]
fn test_cell_index() {
    let root = sample_table();
    let head = find_element(&root, "head").unwrap();
    assert_eq!(table::cell_index(head, "col-size"), Some(1));
    assert_eq!(table::cell_index(head, "nope"), None);
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_document_queries() {
    let doc = Document::new(sample_table());
    assert_eq!(doc.query_tag("td").len(), 4);
    assert!(doc.has_ancestor("files", "article"));
    assert!(!doc.has_ancestor("article", "article"));
}

#[test]
fn test_location_parse_and_hash() {
    let location = Location::parse("/deck/index.html#__tabbed_1_2");
    assert_eq!(location.path, "/deck/index.html");
    assert_eq!(location.hash, "__tabbed_1_2");

    let location = Location::new("/").with_hash("#top");
    assert_eq!(location.hash, "top");
}

#[test]
fn test_scroll_to_clamps_at_zero() {
    let mut doc = Document::new(Element::article());
    doc.scroll_to(-5);
    assert_eq!(doc.scroll_y, 0);
    doc.scroll_to(42);
    assert_eq!(doc.scroll_y, 42);
}

#[test]
fn test_event_targets() {
    assert_eq!(Event::click("a").target(), Some("a"));
    assert_eq!(Event::change("b").target(), Some("b"));
    assert_eq!(Event::Ready.target(), None);
}
