use crate::parsing::html::Attributes;
use crate::parsing::inline::node::Leaf;

/// The `[[...]]` token shape shared by every element form.
pub struct DoubleBracket;

impl DoubleBracket {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";

    /// Length of a double-bracket token at the start of `rest`.
    pub fn scan(rest: &str) -> Option<usize> {
        let body = rest.strip_prefix(Self::OPEN)?;
        let end = body.find(Self::CLOSE)?;
        Some(Self::OPEN.len() + end + Self::CLOSE.len())
    }

    /// The text between the brackets.
    pub fn inner(token: &str) -> Option<&str> {
        token.strip_prefix(Self::OPEN)?.strip_suffix(Self::CLOSE)
    }
}

/// A recognised `[[...]]` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Self-contained output: `[[# name]]` anchors and `[[image ...]]`.
    Leaf(Leaf),
    SpanOpen(Attributes),
    SpanClose,
    SizeOpen(String),
    SizeClose,
}

impl Element {
    pub const ANCHOR: char = '#';

    /// Interprets a double-bracket token.
    ///
    /// Returns `None` for unknown or malformed forms; callers render those
    /// as literal text.
    pub fn parse(token: &str, id_prefix: &str) -> Option<Self> {
        let inner = DoubleBracket::inner(token)?.trim();

        if let Some(name) = inner.strip_prefix(Self::ANCHOR) {
            let name = name.trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return None;
            }
            return Some(Element::Leaf(Leaf::Anchor {
                name: name.to_string(),
            }));
        }

        let (name, args) = match inner.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (inner, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "/span" if args.is_empty() => Some(Element::SpanClose),
            "/size" if args.is_empty() => Some(Element::SizeClose),
            "span" => Some(Element::SpanOpen(Attributes::parse(args, id_prefix))),
            "size" if !args.is_empty() => Some(Element::SizeOpen(args.to_string())),
            "image" => Self::image(args, id_prefix),
            _ => None,
        }
    }

    fn image(args: &str, id_prefix: &str) -> Option<Self> {
        let (src, rest) = match args.split_once(char::is_whitespace) {
            Some((src, rest)) => (src, rest),
            None => (args, ""),
        };
        if src.is_empty() || src.contains('=') {
            return None;
        }

        let mut attrs = Attributes::parse(rest, id_prefix);
        let link = attrs.take("link");
        if attrs.get("alt").is_none() {
            let file_name = src.rsplit('/').next().unwrap_or(src);
            attrs.0.insert(0, ("alt".to_string(), file_name.to_string()));
        }

        Some(Element::Leaf(Leaf::Image {
            src: src.to_string(),
            attrs,
            link,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(token: &str) -> Option<Element> {
        Element::parse(token, "u-")
    }

    #[test]
    fn scan_finds_first_close() {
        assert_eq!(DoubleBracket::scan("[[span]]text[[/span]]"), Some(8));
        assert_eq!(DoubleBracket::scan("[[span"), None);
    }

    #[test]
    fn anchor() {
        assert_eq!(
            parse("[[# top]]"),
            Some(Element::Leaf(Leaf::Anchor {
                name: "top".to_string()
            }))
        );
        assert_eq!(parse("[[#]]"), None);
        assert_eq!(parse("[[# two words]]"), None);
    }

    #[test]
    fn span_open_and_close() {
        let Some(Element::SpanOpen(attrs)) = parse(r#"[[span class="note" id="x"]]"#) else {
            panic!("expected span open");
        };
        assert_eq!(attrs.get("class"), Some("note"));
        assert_eq!(attrs.get("id"), Some("u-x"));
        assert_eq!(parse("[[span]]"), Some(Element::SpanOpen(Attributes::default())));
        assert_eq!(parse("[[/span]]"), Some(Element::SpanClose));
        assert_eq!(parse("[[/SPAN]]"), Some(Element::SpanClose));
    }

    #[test]
    fn size_requires_a_value() {
        assert_eq!(
            parse("[[size 80%]]"),
            Some(Element::SizeOpen("80%".to_string()))
        );
        assert_eq!(parse("[[size]]"), None);
        assert_eq!(parse("[[/size]]"), Some(Element::SizeClose));
    }

    #[test]
    fn image_defaults_alt_and_extracts_link() {
        let Some(Element::Leaf(Leaf::Image { src, attrs, link })) =
            parse(r#"[[image /files/cat.png link="/cats" width="20"]]"#)
        else {
            panic!("expected image");
        };
        assert_eq!(src, "/files/cat.png");
        assert_eq!(link.as_deref(), Some("/cats"));
        assert_eq!(
            attrs.0,
            vec![
                ("alt".to_string(), "cat.png".to_string()),
                ("width".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn image_keeps_explicit_alt() {
        let Some(Element::Leaf(Leaf::Image { attrs, .. })) =
            parse(r#"[[image cat.png alt="A cat"]]"#)
        else {
            panic!("expected image");
        };
        assert_eq!(attrs.get("alt"), Some("A cat"));
    }

    #[test]
    fn malformed_forms_are_rejected() {
        assert_eq!(parse("[[image]]"), None);
        assert_eq!(parse(r#"[[image alt="x"]]"#), None);
        assert_eq!(parse("[[unknown thing]]"), None);
        assert_eq!(parse("[[/span extra]]"), None);
        assert_eq!(parse("[[div]]"), None);
    }
}
