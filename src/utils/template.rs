// Placeholder substitution for the shipped page files

/// Replaces every `{{name}}` in `source` with the HTML-escaped value.
/// Unknown placeholders are left as they are. `source` is scanned once, so
/// inserted values are never substituted again.
pub fn render(source: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after_open[..close];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                out.push_str(&escape_html(value));
                rest = &after_open[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
