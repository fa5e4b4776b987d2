//! HTML output helpers shared by block and inline rendering.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Escapes `&`, `<` and `>` in text content.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Ordered `key="value"` pairs taken from a bracket tag such as
/// `[[div class="box" id="intro"]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(pub Vec<(String, String)>);

impl Attributes {
    /// Parses every `key="value"` (or `key='value'`) pair in `src`.
    ///
    /// Anything that is not a well formed pair is skipped. `id` values get
    /// `id_prefix` prepended so user ids cannot collide with generated ones.
    pub fn parse(src: &str, id_prefix: &str) -> Self {
        static ATTR_REGEX: OnceLock<Regex> = OnceLock::new();
        let attr_regex = ATTR_REGEX.get_or_init(|| {
            Regex::new(r#"([A-Za-z][A-Za-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
                .expect("Invalid attribute regex")
        });

        let pairs = attr_regex
            .captures_iter(src)
            .map(|caps| {
                let key = caps[1].to_ascii_lowercase();
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .map_or("", |m| m.as_str());
                let value = if key == "id" && !value.starts_with(id_prefix) {
                    format!("{id_prefix}{value}")
                } else {
                    value.to_string()
                };
                (key, value)
            })
            .collect();
        Self(pairs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes and returns the first value stored under `key`.
    pub fn take(&mut self, key: &str) -> Option<String> {
        let idx = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(idx).1)
    }

    /// Writes ` key="value"` for every pair, in source order.
    pub fn write_to(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(attrs: &Attributes) -> String {
        let mut out = String::new();
        attrs.write_to(&mut out);
        out
    }

    #[test]
    fn escapes_text_but_not_quotes() {
        assert_eq!(escape_text(r#"a < b & "c""#), r#"a &lt; b &amp; "c""#);
    }

    #[test]
    fn escapes_attribute_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn parses_pairs_in_order() {
        let attrs = Attributes::parse(r#"class="box" style='color: red'"#, "u-");
        assert_eq!(render(&attrs), r#" class="box" style="color: red""#);
    }

    #[test]
    fn prefixes_ids() {
        let attrs = Attributes::parse(r#"id="intro""#, "u-");
        assert_eq!(attrs.get("id"), Some("u-intro"));
    }

    #[test]
    fn already_prefixed_id_is_kept() {
        let attrs = Attributes::parse(r#"id="u-intro""#, "u-");
        assert_eq!(attrs.get("id"), Some("u-intro"));
    }

    #[test]
    fn skips_garbage() {
        let attrs = Attributes::parse("just words = nothing", "u-");
        assert_eq!(attrs, Attributes::default());
    }

    #[test]
    fn take_removes_pair() {
        let mut attrs = Attributes::parse(r#"link="/x" alt="y""#, "u-");
        assert_eq!(attrs.take("link").as_deref(), Some("/x"));
        assert_eq!(render(&attrs), r#" alt="y""#);
    }
}
