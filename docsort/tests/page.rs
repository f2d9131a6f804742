use docdom::{markdown, table, Document, Element, Event, EventResult, Location};
use docsort::rules::CustomColumn;
use docsort::{Error, Page, PageOptions, SortDirection, SortOptions};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

const DECKS_PAGE: &str = r#"# Langues

| Titre | Taille | Nombre de cartes | Dernière modification |
| ----- | ------ | ---------------- | --------------------- |
| [:material-folder: Anglais](Anglais/index.md) | 2.0 Mo | 1 234 | 07/03/2024 09:05:02 |
| [Allemand](Allemand.apkg) | 512.0 Ko | 87 | 01/02/2024 10:00:00 |
| [Espagnol](Espagnol.apkg) | 1.0 Go | 12 | 31/12/2023 23:59:59 |

=== "Linux"

    apt install anki

=== "Windows"

    winget install anki
"#;

fn new_page() -> Page {
    Page::new(PageOptions::default()).unwrap()
}

fn titles(doc: &Document) -> Vec<String> {
    let t = doc.get("table-1").unwrap();
    table::bodies(t)
        .into_iter()
        .flat_map(table::rows)
        .map(|row| table::cell(row, 0).unwrap().inner_text())
        .collect()
}

fn ready(page: &mut Page) -> Document {
    let mut doc = markdown::parse(DECKS_PAGE);
    page.handle(&mut doc, &Event::Ready);
    doc
}

// ============================================================================
// Ready
// ============================================================================

#[test]
fn test_ready_wires_article_tables() {
    init_logging();
    let mut page = new_page();
    let doc = ready(&mut page);

    let sorter = page.table("table-1").expect("table wired");
    assert_eq!(
        sorter.column_types(),
        vec![Some("default"), Some("filesize"), Some("number"), Some("date")]
    );
    assert!(docsort::tablesort::is_wired(&doc, "table-1"));
}

#[test]
fn test_ready_is_idempotent() {
    let mut page = new_page();
    let mut doc = markdown::parse(DECKS_PAGE);
    doc.get_mut("table-1-col-1")
        .unwrap()
        .set_attr("data-sort-default", "");

    page.handle(&mut doc, &Event::Ready);
    assert_eq!(titles(&doc), vec!["Espagnol", "Anglais", "Allemand"]);

    page.handle(&mut doc, &Event::Ready);
    assert_eq!(page.tables().count(), 1);
    assert_eq!(titles(&doc), vec!["Espagnol", "Anglais", "Allemand"]);
    assert_eq!(
        doc.get("table-1-col-1").unwrap().get_attr("aria-sort"),
        Some("descending")
    );
}

#[test]
fn test_navigation_rewires_new_tables() {
    let mut page = new_page();
    ready(&mut page);

    let mut next = markdown::parse("| N |\n|---|\n| 1 |\n| 3 |\n");
    page.handle(&mut next, &Event::Ready);
    assert_eq!(page.tables().count(), 1);
    assert_eq!(page.table("table-1").unwrap().column_types(), vec![Some("number")]);

    let mut empty = markdown::parse("# Vide\n");
    page.handle(&mut empty, &Event::Ready);
    assert_eq!(page.tables().count(), 0);
}

#[test]
fn test_table_selection() {
    let styled = Element::table()
        .id("styled")
        .class("grid")
        .child(Element::tr().child(Element::th("N")))
        .child(Element::tr().child(Element::td("1")));
    let outside = Element::table()
        .id("outside")
        .child(Element::tr().child(Element::th("N")))
        .child(Element::tr().child(Element::td("1")));
    let root = Element::div()
        .child(Element::article().child(styled))
        .child(outside);

    let mut doc = Document::new(root.clone());
    let mut page = new_page();
    page.handle(&mut doc, &Event::Ready);
    assert_eq!(page.tables().count(), 0);

    let options = PageOptions::default().with_sort(
        SortOptions::default()
            .without_scope()
            .with_skip_classed(false),
    );
    let mut doc = Document::new(root);
    let mut page = Page::new(options).unwrap();
    page.handle(&mut doc, &Event::Ready);
    assert!(page.table("styled").is_some());
    assert!(page.table("outside").is_some());
}

// ============================================================================
// Clicks
// ============================================================================

#[test]
fn test_header_clicks_toggle_sort() {
    init_logging();
    let mut page = new_page();
    let mut doc = ready(&mut page);

    let result = page.handle(&mut doc, &Event::click("table-1-col-2"));
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(titles(&doc), vec!["Anglais", "Allemand", "Espagnol"]);

    page.handle(&mut doc, &Event::click("table-1-col-2"));
    assert_eq!(titles(&doc), vec!["Espagnol", "Allemand", "Anglais"]);

    page.handle(&mut doc, &Event::click("table-1-col-3"));
    assert_eq!(titles(&doc), vec!["Anglais", "Allemand", "Espagnol"]);
    assert_eq!(doc.get("table-1-col-2").unwrap().get_attr("aria-sort"), None);
}

#[test]
fn test_sort_renders_new_order() {
    let mut page = new_page();
    let mut doc = ready(&mut page);
    page.handle(&mut doc, &Event::click("table-1-col-1"));

    let rendered = markdown::render(&doc);
    let espagnol = rendered.find("[Espagnol](Espagnol.apkg)").unwrap();
    let anglais = rendered.find("[:material-folder: Anglais](Anglais/index.md)").unwrap();
    let allemand = rendered.find("[Allemand](Allemand.apkg)").unwrap();
    assert!(espagnol < anglais && anglais < allemand);
}

#[test]
fn test_ignored_clicks() {
    let mut page = new_page();
    let mut doc = ready(&mut page);
    let before = doc.clone();

    assert_eq!(page.handle(&mut doc, &Event::click("missing")), EventResult::Ignored);
    assert_eq!(page.handle(&mut doc, &Event::click("content")), EventResult::Ignored);
    assert_eq!(doc, before);
}

#[test]
fn test_unsortable_header_click_is_ignored() {
    let mut page = new_page();
    let mut doc = markdown::parse(DECKS_PAGE);
    doc.get_mut("table-1-col-0")
        .unwrap()
        .set_attr("data-sort-method", "none");
    page.handle(&mut doc, &Event::Ready);

    assert_eq!(
        page.handle(&mut doc, &Event::click("table-1-col-0")),
        EventResult::Ignored
    );
    assert_eq!(titles(&doc), vec!["Anglais", "Allemand", "Espagnol"]);
}

#[test]
fn test_label_click_selects_tab() {
    let mut page = new_page();
    let mut doc = ready(&mut page);
    let label_id = doc
        .query_tag("label")
        .into_iter()
        .find(|label| label.get_attr("for") == Some("__tabbed_1_2"))
        .map(|label| label.id.clone())
        .unwrap();

    assert_eq!(page.handle(&mut doc, &Event::click(label_id)), EventResult::Consumed);
    assert!(doc.get("__tabbed_1_2").unwrap().checked);
    assert!(!doc.get("__tabbed_1_1").unwrap().checked);

    page.handle(&mut doc, &Event::change("__tabbed_1_1"));
    assert!(doc.get("__tabbed_1_1").unwrap().checked);
}

#[test]
fn test_ready_restores_fragment() {
    let mut page = new_page();
    let mut doc = markdown::parse(DECKS_PAGE).with_location(Location::parse("/langues#__tabbed_1_2"));
    assert_eq!(page.handle(&mut doc, &Event::Ready), EventResult::Consumed);
    assert!(doc.get("__tabbed_1_2").unwrap().checked);
}

// ============================================================================
// API
// ============================================================================

#[test]
fn test_sort_api_errors() {
    let mut page = new_page();
    let mut doc = ready(&mut page);

    assert!(matches!(
        page.sort(&mut doc, "table-9", 0),
        Err(Error::UnknownTable(_))
    ));
    assert!(matches!(
        page.sort(&mut doc, "table-1", 7),
        Err(Error::ColumnOutOfRange { column: 7, .. })
    ));
    assert_eq!(page.sort(&mut doc, "table-1", 1).unwrap(), SortDirection::Descending);
}

#[test]
fn test_custom_rules_apply_to_new_tables() {
    let mut page = new_page();
    page.rules_mut().extend(CustomColumn::new(
        "version",
        |text| text.starts_with('v'),
        |a, b| b.cmp(a),
    ));

    let mut doc = markdown::parse("| Version |\n|---|\n| v1 |\n| v3 |\n| v2 |\n");
    page.handle(&mut doc, &Event::Ready);
    assert_eq!(page.table("table-1").unwrap().column_types(), vec![Some("version")]);
    page.handle(&mut doc, &Event::click("table-1-col-0"));
    assert_eq!(titles(&doc), vec!["v3", "v2", "v1"]);
}

#[test]
fn test_invalid_mobile_pattern() {
    let options = PageOptions::default()
        .with_tabs(docsort::TabOptions::default().with_mobile_pattern("[unclosed"));
    assert!(matches!(Page::new(options), Err(Error::InvalidPattern(_))));
}
