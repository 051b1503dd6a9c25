use std::fmt::{self, Write};

fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Escape text for insertion into HTML content or quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match entity(ch) {
            Some(escaped) => output.push_str(escaped),
            None => output.push(ch),
        }
    }
    output
}

/// Nullable variant of `escape_html`: a missing value escapes to `""`.
pub fn escape_html_opt(text: Option<&str>) -> String {
    text.map(escape_html).unwrap_or_default()
}

/// Display adapter that escapes its inner value while formatting.
///
/// `format!("<b>{}</b>", Escaped(&booking.id))`
pub struct Escaped<T>(pub T);

impl<T: fmt::Display> fmt::Display for Escaped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = EscapingWriter { inner: f };
        write!(writer, "{}", self.0)
    }
}

struct EscapingWriter<'a, 'b> {
    inner: &'a mut fmt::Formatter<'b>,
}

impl fmt::Write for EscapingWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            match entity(ch) {
                Some(escaped) => self.inner.write_str(escaped)?,
                None => self.inner.write_char(ch)?,
            }
        }
        Ok(())
    }
}
