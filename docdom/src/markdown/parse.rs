use super::attrs::{parse_attr_list, split_attr_list};
use super::inline::visible_text;
use super::{ALIGN_KEY, SOURCE_KEY};
use crate::document::Document;
use crate::element::Element;
use crate::types::Direction;

#[derive(Debug, Default)]
struct Counters {
    tables: usize,
    tab_sets: usize,
}

/// Parse a Markdown page into a document rooted at an `article`.
pub fn parse(source: &str) -> Document {
    let lines: Vec<&str> = source.lines().collect();
    let mut counters = Counters::default();
    let blocks = parse_blocks(&lines, &mut counters);
    log::debug!(
        "[markdown] parsed {} blocks ({} tables, {} tab sets)",
        blocks.len(),
        counters.tables,
        counters.tab_sets
    );
    Document::new(Element::article().id("content").children(blocks))
}

fn parse_blocks(lines: &[&str], counters: &mut Counters) -> Vec<Element> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            i += 1;
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Element::heading(level, text));
            i += 1;
            continue;
        }

        if trimmed.starts_with('|') && lines.get(i + 1).is_some_and(|l| is_separator(l)) {
            flush_paragraph(&mut paragraph, &mut blocks);
            let end = lines[i + 2..]
                .iter()
                .position(|l| !l.trim().starts_with('|'))
                .map_or(lines.len(), |n| i + 2 + n);
            counters.tables += 1;
            blocks.push(parse_table(&lines[i..end], counters.tables));
            i = end;
            continue;
        }

        if tab_marker(trimmed).is_some() {
            flush_paragraph(&mut paragraph, &mut blocks);
            i = parse_tabbed_set(lines, i, counters, &mut blocks);
            continue;
        }

        paragraph.push(trimmed);
        i += 1;
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<Element>) {
    if !paragraph.is_empty() {
        blocks.push(Element::paragraph(paragraph.join("\n")));
        paragraph.clear();
    }
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some((level as u8, rest.trim()))
}

fn split_row(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(str::trim).collect()
}

fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|')
        && split_row(trimmed).iter().all(|cell| {
            let inner = cell.trim_start_matches(':').trim_end_matches(':');
            !inner.is_empty() && inner.chars().all(|c| c == '-')
        })
}

fn alignment(separator_cell: &str) -> Option<&'static str> {
    match (
        separator_cell.starts_with(':'),
        separator_cell.ends_with(':'),
    ) {
        (true, true) => Some("center"),
        (false, true) => Some("right"),
        (true, false) => Some("left"),
        (false, false) => None,
    }
}

fn parse_table(lines: &[&str], number: usize) -> Element {
    let table_id = format!("table-{number}");
    let aligns: Vec<_> = split_row(lines[1]).into_iter().map(alignment).collect();

    let mut header = Element::tr();
    for (index, raw) in split_row(lines[0]).into_iter().enumerate() {
        let (label, attrs) = split_attr_list(raw);
        let mut th = Element::th(visible_text(label)).id(format!("{table_id}-col-{index}"));
        if let Some(attrs) = attrs {
            for (key, value) in parse_attr_list(attrs) {
                th = match key.as_str() {
                    "class" => th.class(value),
                    _ => th.attr(key, value),
                };
            }
        }
        if let Some(Some(align)) = aligns.get(index) {
            th = th.data(ALIGN_KEY, *align);
        }
        header = header.child(th);
    }

    let columns = header.child_nodes().len();
    let body = Element::tbody().children(lines[2..].iter().map(|line| {
        let mut cells = split_row(line);
        cells.resize(columns.max(cells.len()), "");
        Element::tr().children(cells.into_iter().map(cell))
    }));

    Element::table()
        .id(table_id)
        .child(Element::thead().child(header))
        .child(body)
}

fn cell(raw: &str) -> Element {
    let text = visible_text(raw);
    let td = Element::td(text.clone());
    if text == raw {
        td
    } else {
        td.data(SOURCE_KEY, raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TabMarker<'a> {
    new_set: bool,
    selected: bool,
    label: &'a str,
}

fn tab_marker(line: &str) -> Option<TabMarker<'_>> {
    let rest = line.strip_prefix("===")?;
    let flags_len = rest.find(|c: char| c != '!' && c != '+').unwrap_or(rest.len());
    let (flags, rest) = rest.split_at(flags_len);
    let label = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    Some(TabMarker {
        new_set: flags.contains('!'),
        selected: flags.contains('+'),
        label,
    })
}

struct Tab {
    label: String,
    selected: bool,
    content: Vec<Element>,
}

/// Parse consecutive tab blocks starting at `start` into one tabbed set.
/// Returns the index of the first line after the set.
fn parse_tabbed_set(
    lines: &[&str],
    start: usize,
    counters: &mut Counters,
    blocks: &mut Vec<Element>,
) -> usize {
    counters.tab_sets += 1;
    let number = counters.tab_sets;
    let mut tabs = Vec::new();
    let mut i = start;

    while let Some(marker) = lines.get(i).and_then(|l| tab_marker(l.trim())) {
        if marker.new_set && !tabs.is_empty() {
            break;
        }
        i += 1;

        let mut body = Vec::new();
        while let Some(line) = lines.get(i) {
            if line.trim().is_empty() {
                body.push("");
            } else if let Some(inner) = line.strip_prefix("    ") {
                body.push(inner);
            } else {
                break;
            }
            i += 1;
        }
        while body.last() == Some(&"") {
            body.pop();
        }

        tabs.push(Tab {
            label: marker.label.to_string(),
            selected: marker.selected,
            content: parse_blocks(&body, counters),
        });

        // Blank lines are only skipped when another tab of this set follows.
        let next = lines[i..].iter().position(|l| !l.trim().is_empty());
        match next.and_then(|n| lines.get(i + n).map(|l| (n, tab_marker(l.trim())))) {
            Some((n, Some(marker))) if !marker.new_set => i += n,
            _ => break,
        }
    }

    blocks.push(tabbed_set(number, tabs));
    i
}

fn tabbed_set(number: usize, tabs: Vec<Tab>) -> Element {
    let selected = tabs.iter().rposition(|t| t.selected).unwrap_or(0);
    let name = format!("__tabbed_{number}");

    let mut inputs = Vec::with_capacity(tabs.len());
    let mut labels = Element::div().class("tabbed-labels").direction(Direction::Row);
    let mut content = Element::div().class("tabbed-content");

    for (index, tab) in tabs.into_iter().enumerate() {
        let input_id = format!("{name}_{}", index + 1);
        let checked = index == selected;
        inputs.push(
            Element::input()
                .id(input_id.clone())
                .attr("type", "radio")
                .attr("name", name.clone())
                .checked(checked),
        );
        labels = labels.child(Element::label(tab.label).attr("for", input_id));
        content = content.child(
            Element::div()
                .class("tabbed-block")
                .hidden(!checked)
                .children(tab.content),
        );
    }

    let count = inputs.len();
    Element::div()
        .id(format!("tabbed-set-{number}"))
        .class("tabbed-set")
        .attr("data-tabs", format!("{number}:{count}"))
        .children(inputs)
        .child(labels)
        .child(content)
}
