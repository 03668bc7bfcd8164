//! Framework independent description of the visual tree.
//!
//! The layout (which element nests in which) is built in [`root`], the
//! content comes from [`crate::text`] and the classes from [`crate::style`].
//! [`Element::to_html`] lowers the description to yew's `Html`.

use yew::{html, Html};

use crate::{style, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Container,
    Block,
    Heading,
    Paragraph,
}

impl Kind {
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Container => "div",
            Kind::Block => "div",
            Kind::Heading => "h1",
            Kind::Paragraph => "p",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Children(Vec<Element>),
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: Kind,
    pub class: &'static str,
    pub content: Content,
}

impl Element {
    pub fn parent(kind: Kind, class: &'static str, children: Vec<Element>) -> Self {
        Element { kind, class, content: Content::Children(children) }
    }

    pub fn leaf(kind: Kind, class: &'static str, text: &'static str) -> Self {
        Element { kind, class, content: Content::Text(text) }
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn text(&self) -> Option<&'static str> {
        match self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    /// Depth first, pre-order walk starting with `self`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.iter().filter(|el| el.kind == kind).count()
    }

    pub fn find(&self, kind: Kind) -> Option<&Element> {
        self.iter().find(|el| el.kind == kind)
    }

    pub fn to_html(&self) -> Html {
        let tag = self.tag();

        match &self.content {
            Content::Text(text) => html! {
                <@{tag} class={self.class}>{*text}</@>
            },
            Content::Children(children) => html! {
                <@{tag} class={self.class}>
                    {for children.iter().map(Element::to_html)}
                </@>
            },
        }
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let el = self.stack.pop()?;
        // reversed so the first child comes off the stack first
        self.stack.extend(el.children().iter().rev());
        Some(el)
    }
}

/// The root view's tree:
/// `Container > Block > [Heading, Paragraph]`.
pub fn root() -> Element {
    Element::parent(Kind::Container, style::CONTAINER, vec![
        Element::parent(Kind::Block, style::BLOCK, vec![
            Element::leaf(Kind::Heading, style::HEADING, text::HEADING),
            Element::leaf(Kind::Paragraph, style::SUBTITLE, text::SUBTITLE),
        ]),
    ])
}
