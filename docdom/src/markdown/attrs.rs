/// Split a trailing attribute list off a cell: `Name { a="b" }` gives
/// `("Name", Some("a=\"b\""))`.
pub fn split_attr_list(raw: &str) -> (&str, Option<&str>) {
    let trimmed = raw.trim_end();
    if !trimmed.ends_with('}') {
        return (raw.trim(), None);
    }
    match trimmed.rfind('{') {
        Some(open) => (
            trimmed[..open].trim(),
            Some(trimmed[open + 1..trimmed.len() - 1].trim()),
        ),
        None => (raw.trim(), None),
    }
}

/// Parse the inside of an attribute list into `(key, value)` pairs.
///
/// `key="value"` and `key='value'` keep the value; a bare `key` gets an
/// empty value; `.name` becomes `("class", "name")` and `#name` becomes
/// `("id", "name")`.
pub fn parse_attr_list(list: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut chars = list.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        while let Some(c) = chars.next_if(|c| !c.is_whitespace() && *c != '=') {
            key.push(c);
        }

        let mut value = String::new();
        if chars.next_if_eq(&'=').is_some() {
            match chars.peek().copied() {
                Some(quote @ ('"' | '\'')) => {
                    chars.next();
                    for c in chars.by_ref() {
                        if c == quote {
                            break;
                        }
                        value.push(c);
                    }
                }
                _ => {
                    while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                        value.push(c);
                    }
                }
            }
        }

        if let Some(class) = key.strip_prefix('.') {
            pairs.push(("class".to_string(), class.to_string()));
        } else if let Some(id) = key.strip_prefix('#') {
            pairs.push(("id".to_string(), id.to_string()));
        } else if !key.is_empty() {
            pairs.push((key, value));
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_attr_list() {
        assert_eq!(
            split_attr_list("Titre { aria-sort=\"ascending\" }"),
            ("Titre", Some("aria-sort=\"ascending\""))
        );
        assert_eq!(split_attr_list(" Taille "), ("Taille", None));
    }

    #[test]
    fn test_parse_attr_list_forms() {
        let pairs = parse_attr_list(r#"aria-sort="ascending" data-sort-default .wide #size k='a b'"#);
        assert_eq!(
            pairs,
            vec![
                ("aria-sort".to_string(), "ascending".to_string()),
                ("data-sort-default".to_string(), String::new()),
                ("class".to_string(), "wide".to_string()),
                ("id".to_string(), "size".to_string()),
                ("k".to_string(), "a b".to_string()),
            ]
        );
    }
}
