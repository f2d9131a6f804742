/// Text a reader sees for a fragment of inline Markdown.
///
/// Links keep their label (and lose any trailing attribute list), icon
/// shortcodes such as `:material-folder:` are dropped, backticks are
/// removed, and runs of whitespace collapse to one space.
pub fn visible_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        match c {
            '[' => {
                if let Some((label, after)) = split_link(rest) {
                    out.push_str(&visible_text(label));
                    rest = skip_attr_list(after);
                    continue;
                }
            }
            ':' => {
                if let Some(len) = shortcode_len(rest) {
                    rest = &rest[len..];
                    continue;
                }
            }
            '`' => {
                rest = &rest[1..];
                continue;
            }
            _ => {}
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `[label](target)rest` into `(label, rest)`.
fn split_link(s: &str) -> Option<(&str, &str)> {
    let close = s.find("](")?;
    let label = &s[1..close];
    let target_start = close + 2;
    let target_len = s[target_start..].find(')')?;
    Some((label, &s[target_start + target_len + 1..]))
}

fn skip_attr_list(s: &str) -> &str {
    let trimmed = s.trim_start();
    if trimmed.starts_with('{') {
        if let Some(end) = trimmed.find('}') {
            return &trimmed[end + 1..];
        }
    }
    s
}

/// Length of a `:name-like-this:` shortcode at the start of `s`.
fn shortcode_len(s: &str) -> Option<usize> {
    let body = &s[1..];
    let end = body.find(':')?;
    let name = &body[..end];
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(end + 2)
}
