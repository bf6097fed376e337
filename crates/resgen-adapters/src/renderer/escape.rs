//! Output escaping per template mode.

use std::fmt::Write as _;

use cssparser::CssStringWriter;

/// Escape for HTML and XML text and attribute values.
pub fn markup(input: &str) -> String {
    tera::escape_html(input)
}

/// Escape for the inside of a JavaScript string literal.
///
/// JSON string encoding covers quotes, backslashes and control characters.
/// On top of it: single quotes, `</` and the two JSON-legal line separators.
pub fn javascript(input: &str) -> String {
    let quoted = serde_json::Value::from(input).to_string();
    quoted[1..quoted.len() - 1]
        .replace('\'', "\\'")
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// A JavaScript array literal of strings.
pub fn javascript_array(items: &[String]) -> String {
    let array = serde_json::Value::from(items.to_vec()).to_string();
    array
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Escape for the inside of a CSS string, whichever quote delimits it.
pub fn css(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, part) in input.split('\'').enumerate() {
        if i > 0 {
            out.push_str("\\'");
        }
        // Writing into a String cannot fail.
        let _ = CssStringWriter::new(&mut out).write_str(part);
    }
    out
}
