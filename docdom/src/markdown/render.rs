use super::{ALIGN_KEY, SOURCE_KEY};
use crate::document::Document;
use crate::element::Element;
use crate::table;
use crate::text::{display_width, pad_to_width};

/// Write a document back to Markdown.
///
/// Tables come out in their current row order, with header attributes
/// (including the current `aria-sort`) as attribute lists. Tabbed sets
/// keep their current selection.
pub fn render(document: &Document) -> String {
    let mut out = String::new();
    render_blocks(document.root.child_nodes(), &mut out);
    out
}

fn render_blocks(blocks: &[Element], out: &mut String) {
    let mut previous_was_tab_set = false;
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let is_tab_set = block.has_class("tabbed-set");
        render_block(block, previous_was_tab_set && is_tab_set, out);
        previous_was_tab_set = is_tab_set;
    }
}

fn render_block(block: &Element, force_new_set: bool, out: &mut String) {
    match block.tag.as_str() {
        "table" => render_table(block, out),
        tag if tag.len() == 2 && tag.starts_with('h') => {
            let level = tag[1..].parse::<usize>().unwrap_or(1);
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(&block.inner_text());
            out.push('\n');
        }
        _ if block.has_class("tabbed-set") => render_tabbed_set(block, force_new_set, out),
        _ => {
            out.push_str(&block.inner_text());
            out.push('\n');
        }
    }
}

fn cell_source(cell: &Element) -> String {
    cell.get_data(SOURCE_KEY)
        .cloned()
        .unwrap_or_else(|| cell.inner_text())
}

fn header_source(th: &Element) -> String {
    let mut source = th.inner_text();
    let mut attrs: Vec<String> = th
        .classes
        .iter()
        .map(|class| format!(".{class}"))
        .collect();
    attrs.extend(th.attrs.iter().map(|(key, value)| {
        if value.is_empty() {
            key.clone()
        } else {
            format!("{key}=\"{value}\"")
        }
    }));
    if !attrs.is_empty() {
        source.push_str(&format!(" {{ {} }}", attrs.join(" ")));
    }
    source
}

fn separator(width: usize, align: Option<&str>) -> String {
    let width = width.max(3);
    match align {
        Some("center") => format!(":{}:", "-".repeat(width - 2)),
        Some("right") => format!("{}:", "-".repeat(width - 1)),
        Some("left") => format!(":{}", "-".repeat(width - 1)),
        _ => "-".repeat(width),
    }
}

fn render_table(element: &Element, out: &mut String) {
    let Some(header_row) = table::header_row(element) else {
        return;
    };
    let headers: Vec<&Element> = table::cells(header_row).collect();
    let header_texts: Vec<String> = headers.iter().map(|th| header_source(th)).collect();

    let body_rows: Vec<Vec<String>> = table::bodies(element)
        .into_iter()
        .flat_map(table::rows)
        .filter(|row| row.id != header_row.id)
        .map(|row| table::cells(row).map(cell_source).collect())
        .collect();

    let mut widths: Vec<usize> = header_texts.iter().map(|h| display_width(h)).collect();
    for row in &body_rows {
        for (index, text) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(display_width(text));
            }
        }
    }
    for width in &mut widths {
        *width = (*width).max(3);
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                pad_to_width(cells.get(index).map_or("", String::as_str), *width)
            })
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };

    out.push_str(&line(&header_texts));
    let separators: Vec<String> = widths
        .iter()
        .zip(&headers)
        .map(|(width, th)| separator(*width, th.get_data(ALIGN_KEY).map(String::as_str)))
        .collect();
    out.push_str(&format!("| {} |\n", separators.join(" | ")));
    for row in &body_rows {
        out.push_str(&line(row));
    }
}

fn render_tabbed_set(set: &Element, force_new_set: bool, out: &mut String) {
    let inputs: Vec<&Element> = set
        .child_nodes()
        .iter()
        .filter(|el| el.tag == "input")
        .collect();
    let labels: Vec<&Element> = set
        .child_nodes()
        .iter()
        .filter(|el| el.has_class("tabbed-labels"))
        .flat_map(|el| el.child_nodes())
        .collect();
    let panels: Vec<&Element> = set
        .child_nodes()
        .iter()
        .filter(|el| el.has_class("tabbed-content"))
        .flat_map(|el| el.child_nodes())
        .collect();

    for (index, input) in inputs.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let label = labels
            .iter()
            .find(|label| label.get_attr("for") == Some(input.id.as_str()))
            .map(|label| label.inner_text())
            .unwrap_or_default();

        let mut flags = String::new();
        if index == 0 && force_new_set {
            flags.push('!');
        }
        if index > 0 && input.checked {
            flags.push('+');
        }
        out.push_str(&format!("==={flags} \"{label}\"\n"));

        if let Some(panel) = panels.get(index) {
            let mut inner = String::new();
            render_blocks(panel.child_nodes(), &mut inner);
            out.push('\n');
            for line in inner.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }
}
