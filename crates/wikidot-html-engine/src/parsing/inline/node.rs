//! # Node Tree
//!
//! Arena of inline formatting nodes built by the parser and serialized to
//! HTML once parsing finishes.
//!
//! A node that never saw its closing marker is not an error: it renders its
//! raw opening marker followed by its children, so unbalanced input degrades
//! to text instead of unbalanced markup. Nodes split by the reopen rule are
//! linked with [`Closure::DeferredTo`] and resolve to their successor's state.

use crate::parsing::html::{Attributes, escape_attr};

/// Index of a node in a [`NodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// The formatting a node applies to its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Italic,
    Bold,
    FixedWidth,
    Strike,
    Underline,
    Subscript,
    Superscript,
    /// `@@...@@`: children are pre-encoded, no tags.
    EscapeLiteral,
    /// `@<...>@`: children are pre-encoded, no tags.
    RawLiteral,
    /// CSS color value.
    Color(String),
    /// CSS font-size value.
    Size(String),
    Span(Attributes),
}

impl NodeKind {
    pub fn open_tag(&self) -> String {
        match self {
            NodeKind::Root | NodeKind::EscapeLiteral | NodeKind::RawLiteral => String::new(),
            NodeKind::Italic => "<em>".to_string(),
            NodeKind::Bold => "<strong>".to_string(),
            NodeKind::FixedWidth => "<tt>".to_string(),
            NodeKind::Strike => r#"<span style="text-decoration: line-through;">"#.to_string(),
            NodeKind::Underline => r#"<span style="text-decoration: underline;">"#.to_string(),
            NodeKind::Subscript => "<sub>".to_string(),
            NodeKind::Superscript => "<sup>".to_string(),
            NodeKind::Color(color) => format!(r#"<span style="color: {};">"#, escape_attr(color)),
            NodeKind::Size(size) => format!(r#"<span style="font-size: {};">"#, escape_attr(size)),
            NodeKind::Span(attrs) => {
                let mut tag = "<span".to_string();
                attrs.write_to(&mut tag);
                tag.push('>');
                tag
            }
        }
    }

    pub fn close_tag(&self) -> &'static str {
        match self {
            NodeKind::Root | NodeKind::EscapeLiteral | NodeKind::RawLiteral => "",
            NodeKind::Italic => "</em>",
            NodeKind::Bold => "</strong>",
            NodeKind::FixedWidth => "</tt>",
            NodeKind::Subscript => "</sub>",
            NodeKind::Superscript => "</sup>",
            NodeKind::Strike
            | NodeKind::Underline
            | NodeKind::Color(_)
            | NodeKind::Size(_)
            | NodeKind::Span(_) => "</span>",
        }
    }
}

/// Whether a node's closing marker has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    Open,
    Closed,
    /// Closed iff the referenced node ends up closed.
    DeferredTo(NodeId),
}

/// Self-contained output that never holds children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    Link {
        href: String,
        text: String,
    },
    Anchor {
        name: String,
    },
    Image {
        src: String,
        attrs: Attributes,
        link: Option<String>,
    },
    LineBreak,
}

impl Leaf {
    pub fn render(&self, out: &mut String) {
        match self {
            Leaf::Link { href, text } => {
                out.push_str(r#"<a href=""#);
                out.push_str(&escape_attr(href));
                out.push_str(r#"">"#);
                out.push_str(&crate::parsing::html::escape_text(text));
                out.push_str("</a>");
            }
            Leaf::Anchor { name } => {
                out.push_str(r#"<a name=""#);
                out.push_str(&escape_attr(name));
                out.push_str(r#""></a>"#);
            }
            Leaf::Image { src, attrs, link } => {
                if let Some(link) = link {
                    out.push_str(r#"<a href=""#);
                    out.push_str(&escape_attr(link));
                    out.push_str(r#"">"#);
                }
                out.push_str(r#"<img src=""#);
                out.push_str(&escape_attr(src));
                out.push('"');
                attrs.write_to(out);
                out.push_str(" />");
                if link.is_some() {
                    out.push_str("</a>");
                }
            }
            Leaf::LineBreak => out.push_str("<br />"),
        }
    }
}

/// One entry in a node's child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Node(NodeId),
    /// Already escaped HTML text.
    Text(String),
    /// Whitespace copied verbatim from the source.
    Whitespace(String),
    Leaf(Leaf),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// Escaped marker text written in place of the tags when unclosed.
    pub raw: String,
    pub children: Vec<Child>,
    pub closure: Closure,
}

/// Arena owning every node of one parse. Index 0 is the always-closed root.
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                raw: String::new(),
                children: vec![],
                closure: Closure::Closed,
            }],
        }
    }

    /// Allocates a new open node. It is not attached to any parent yet.
    pub fn alloc(&mut self, kind: NodeKind, raw: String) -> NodeId {
        self.nodes.push(Node {
            kind,
            raw,
            children: vec![],
            closure: Closure::Open,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn append(&mut self, parent: NodeId, child: Child) {
        self.get_mut(parent).children.push(child);
    }

    /// Follows `DeferredTo` links to the terminal state.
    pub fn is_closed(&self, id: NodeId) -> bool {
        let mut current = id;
        // Links only ever point at newer nodes, so the chain is bounded.
        for _ in 0..self.nodes.len() {
            match self.get(current).closure {
                Closure::Open => return false,
                Closure::Closed => return true,
                Closure::DeferredTo(next) => current = next,
            }
        }
        false
    }

    /// Serializes the tree.
    ///
    /// Spans nest without limit, so the walk keeps its own stack instead of
    /// recursing once per level.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut steps = vec![Step::Enter(Self::ROOT)];

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(id) => self.enter(id, &mut steps, &mut out),
                Step::Child(Child::Node(id)) => steps.push(Step::Enter(*id)),
                Step::Child(Child::Text(text) | Child::Whitespace(text)) => out.push_str(text),
                Step::Child(Child::Leaf(leaf)) => leaf.render(&mut out),
                Step::Close(tag) => out.push_str(tag),
            }
        }
        out
    }

    /// Writes a node's opening and schedules its children and closing tag.
    fn enter<'t>(&'t self, id: NodeId, steps: &mut Vec<Step<'t>>, out: &mut String) {
        let node = self.get(id);
        let mut children = node.children.as_slice();

        if self.is_closed(id) {
            if node.kind != NodeKind::Root
                && let [Child::Whitespace(ws), rest @ ..] = children
            {
                out.push_str(ws);
                children = rest;
            }
            out.push_str(&node.kind.open_tag());
            steps.push(Step::Close(node.kind.close_tag()));
        } else {
            log::debug!("rendering unclosed {:?} as text", node.kind);
            out.push_str(&node.raw);
        }
        steps.extend(children.iter().rev().map(Step::Child));
    }
}

/// Pending work in [`NodeTree::render`].
enum Step<'t> {
    Enter(NodeId),
    Child(&'t Child),
    Close(&'static str),
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Child {
        Child::Text(s.to_string())
    }

    #[test]
    fn closed_node_renders_tags() {
        let mut tree = NodeTree::new();
        let em = tree.alloc(NodeKind::Italic, "//".to_string());
        tree.append(NodeTree::ROOT, Child::Node(em));
        tree.append(em, text("word"));
        tree.get_mut(em).closure = Closure::Closed;
        assert_eq!(tree.render(), "<em>word</em>");
    }

    #[test]
    fn open_node_renders_raw_marker() {
        let mut tree = NodeTree::new();
        let em = tree.alloc(NodeKind::Italic, "//".to_string());
        tree.append(NodeTree::ROOT, Child::Node(em));
        tree.append(em, text("word"));
        assert_eq!(tree.render(), "//word");
    }

    #[test]
    fn leading_whitespace_moves_before_open_tag() {
        let mut tree = NodeTree::new();
        let b = tree.alloc(NodeKind::Bold, String::new());
        tree.append(NodeTree::ROOT, Child::Node(b));
        tree.append(b, Child::Whitespace(" ".to_string()));
        tree.append(b, text("x"));
        tree.get_mut(b).closure = Closure::Closed;
        assert_eq!(tree.render(), " <strong>x</strong>");
    }

    #[test]
    fn deferred_closure_follows_chain() {
        let mut tree = NodeTree::new();
        let a = tree.alloc(NodeKind::Strike, "--".to_string());
        let b = tree.alloc(NodeKind::Strike, String::new());
        let c = tree.alloc(NodeKind::Strike, String::new());
        tree.get_mut(a).closure = Closure::DeferredTo(b);
        tree.get_mut(b).closure = Closure::DeferredTo(c);
        assert!(!tree.is_closed(a));
        tree.get_mut(c).closure = Closure::Closed;
        assert!(tree.is_closed(a));
        assert!(tree.is_closed(b));
    }

    #[test]
    fn leaves_render() {
        let mut out = String::new();
        Leaf::Link {
            href: "http://x.y/?a=1&b=2".to_string(),
            text: "<x>".to_string(),
        }
        .render(&mut out);
        assert_eq!(out, r#"<a href="http://x.y/?a=1&amp;b=2">&lt;x&gt;</a>"#);

        let mut out = String::new();
        Leaf::Anchor {
            name: "top".to_string(),
        }
        .render(&mut out);
        assert_eq!(out, r#"<a name="top"></a>"#);

        let mut out = String::new();
        Leaf::Image {
            src: "cat.png".to_string(),
            attrs: Attributes(vec![("alt".to_string(), "cat.png".to_string())]),
            link: Some("/cats".to_string()),
        }
        .render(&mut out);
        assert_eq!(
            out,
            r#"<a href="/cats"><img src="cat.png" alt="cat.png" /></a>"#
        );
    }

    #[test]
    fn deep_nesting_renders_without_recursion() {
        let depth = 100_000;
        let mut tree = NodeTree::new();
        let mut parent = NodeTree::ROOT;
        for _ in 0..depth {
            let span = tree.alloc(NodeKind::Span(Attributes::default()), "[[span]]".to_string());
            tree.append(parent, Child::Node(span));
            tree.get_mut(span).closure = Closure::Closed;
            parent = span;
        }
        tree.append(parent, text("x"));

        let html = tree.render();
        assert_eq!(
            html,
            format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth))
        );
    }

    #[test]
    fn tag_pairs() {
        assert_eq!(
            NodeKind::Color("#ff0000".to_string()).open_tag(),
            r#"<span style="color: #ff0000;">"#
        );
        assert_eq!(
            NodeKind::Size("80%".to_string()).open_tag(),
            r#"<span style="font-size: 80%;">"#
        );
        assert_eq!(NodeKind::Span(Attributes::default()).open_tag(), "<span>");
        assert_eq!(NodeKind::Underline.close_tag(), "</span>");
        assert_eq!(NodeKind::EscapeLiteral.open_tag(), "");
    }
}
