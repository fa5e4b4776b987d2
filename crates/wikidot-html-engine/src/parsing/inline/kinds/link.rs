use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{node::Leaf, types::Marker};

/// `[[[href|text]]]` or `[[[href]]]`.
pub struct TripleLink;

impl TripleLink {
    pub const OPEN: &'static str = "[[[";
    pub const CLOSE: &'static str = "]]]";
    pub const ALIAS: char = '|';

    /// Length of a triple-bracket token at the start of `rest`.
    pub fn scan(rest: &str) -> Option<usize> {
        let body = rest.strip_prefix(Self::OPEN)?;
        let end = body.find(Self::CLOSE)?;
        Some(Self::OPEN.len() + end + Self::CLOSE.len())
    }

    /// Interprets a token produced by [`TripleLink::scan`].
    pub fn parse(token: &str) -> Option<Leaf> {
        let inner = token
            .strip_prefix(Self::OPEN)?
            .strip_suffix(Self::CLOSE)?;
        let (href, text) = match inner.split_once(Self::ALIAS) {
            Some((href, text)) => (href.trim(), text.trim()),
            None => (inner.trim(), inner.trim()),
        };
        if href.is_empty() {
            return None;
        }
        let text = if text.is_empty() { href } else { text };
        Some(Leaf::Link {
            href: href.to_string(),
            text: text.to_string(),
        })
    }
}

/// `[href text]` where `href` is absolute, rooted or a fragment.
pub struct BracketLink;

impl BracketLink {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"^\[((?:https?|ftp)://[^\s\]]+|mailto:[^\s\]]+|[/#][^\s\]]*)\s+([^\]]+)\]")
                .expect("Invalid bracket link regex")
        })
    }

    pub fn scan(rest: &str) -> Option<usize> {
        if !rest.starts_with('[') {
            return None;
        }
        Self::regex().find(rest).map(|m| m.end())
    }

    pub fn parse(token: &str) -> Option<Leaf> {
        let caps = Self::regex().captures(token)?;
        let text = caps[2].trim();
        if text.is_empty() {
            return None;
        }
        Some(Leaf::Link {
            href: caps[1].to_string(),
            text: text.to_string(),
        })
    }
}

/// A bare `http://`, `https://` or `ftp://` URL in running text.
pub struct BareUrl;

impl BareUrl {
    pub fn scan(rest: &str) -> Option<usize> {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let url_regex = URL_REGEX.get_or_init(|| {
            Regex::new(r#"^(?:https?|ftp)://[^\s\[\]<>"|]+"#).expect("Invalid URL regex")
        });

        let found = url_regex.find(rest)?.as_str();
        let host_start = found.find("://")? + "://".len();
        let mut url = match found[host_start..].find(Marker::Literal.text()) {
            Some(at) => &found[..host_start + at],
            None => found,
        };
        // A trailing marker closes surrounding formatting; trailing
        // punctuation usually belongs to the sentence.
        while url.len() > host_start {
            if let Some((text, _)) = Marker::ALL.iter().find(|(text, _)| url.ends_with(text)) {
                url = &url[..url.len() - text.len()];
                continue;
            }
            match url.chars().last() {
                Some(last) if matches!(last, '.' | ',' | ':' | ';' | '!' | '?' | ')') => {
                    url = &url[..url.len() - last.len_utf8()];
                }
                _ => break,
            }
        }
        if url.len() <= host_start {
            return None;
        }
        Some(url.len())
    }

    pub fn parse(token: &str) -> Leaf {
        Leaf::Link {
            href: token.to_string(),
            text: token.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn link(href: &str, text: &str) -> Leaf {
        Leaf::Link {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn triple_scan_stops_at_first_close() {
        assert_eq!(TripleLink::scan("[[[a|b]]] tail ]]]"), Some(9));
        assert_eq!(TripleLink::scan("[[[unclosed"), None);
        assert_eq!(TripleLink::scan("[[not triple]]"), None);
    }

    #[rstest]
    #[case("[[[page|Some Page]]]", Some(link("page", "Some Page")))]
    #[case("[[[page]]]", Some(link("page", "page")))]
    #[case("[[[ page | ]]]", Some(link("page", "page")))]
    #[case("[[[|text]]]", None)]
    fn triple_parse(#[case] token: &str, #[case] expected: Option<Leaf>) {
        assert_eq!(TripleLink::parse(token), expected);
    }

    #[rstest]
    #[case("[http://example.com Example] rest", Some(28))]
    #[case("[/local/page Local]", Some(19))]
    #[case("[#top Top]", Some(10))]
    #[case("[not a link]", None)]
    #[case("[http://example.com]", None)]
    fn bracket_scan(#[case] rest: &str, #[case] expected: Option<usize>) {
        assert_eq!(BracketLink::scan(rest), expected);
    }

    #[test]
    fn bracket_parse() {
        assert_eq!(
            BracketLink::parse("[http://example.com An  example]"),
            Some(link("http://example.com", "An  example"))
        );
    }

    #[rstest]
    #[case("http://example.com/a?b=c rest", Some(24))]
    #[case("https://example.com.", Some(19))]
    #[case("ftp://files.example.com||", Some(23))]
    #[case("http://a.b//c", Some(13))]
    #[case("http://example.com// after", Some(18))]
    #[case("http://example.com@@ after", Some(18))]
    #[case("http://a.b/x@@y", Some(12))]
    #[case("http://a.b**.", Some(10))]
    #[case("http://**", None)]
    #[case("http://", None)]
    #[case("mailto:someone", None)]
    fn bare_url_scan(#[case] rest: &str, #[case] expected: Option<usize>) {
        assert_eq!(BareUrl::scan(rest), expected);
    }
}
