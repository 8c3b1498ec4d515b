//! Declarative field resolution.
//!
//! A [`FieldRule`] lists the places a value may live, in priority order. The
//! first strategy that yields a usable value wins; if none does, the caller
//! substitutes its default. Name comparisons ignore ASCII case, so
//! `CurrentPlayers`, `currentPlayers` and `currentplayers` are one variant.

use roxmltree::Node;

/// One place to look for a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Text of a direct child element.
    Element(&'static str),
    /// Attribute on the node itself.
    Attribute(&'static str),
    /// Attribute on a direct child element.
    ChildAttribute {
        /// Child element name
        element: &'static str,
        /// Attribute on that child
        attribute: &'static str,
    },
    /// The node's own text content.
    Text,
}

impl Extract {
    /// Returns the trimmed, non-blank value this strategy finds on `node`.
    pub fn probe<'a>(&self, node: Node<'a, '_>) -> Option<&'a str> {
        let raw = match *self {
            Self::Element(name) => child_element(node, name).and_then(|child| child.text()),
            Self::Attribute(name) => attribute(node, name),
            Self::ChildAttribute { element, attribute: name } => {
                child_element(node, element).and_then(|child| attribute(child, name))
            }
            Self::Text => node.text(),
        };
        raw.map(str::trim).filter(|value| !value.is_empty())
    }
}

/// Ordered extraction strategies for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name, for logs
    pub field: &'static str,
    /// Strategies, highest priority first
    pub strategies: &'static [Extract],
}

impl FieldRule {
    /// First value any strategy finds.
    pub fn resolve<'a>(&self, node: Node<'a, '_>) -> Option<&'a str> {
        self.strategies.iter().find_map(|strategy| strategy.probe(node))
    }

    /// First value any strategy finds that `parse` accepts.
    ///
    /// A present but unparseable value falls through to the next strategy.
    pub fn resolve_with<T>(
        &self,
        node: Node<'_, '_>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        self.strategies.iter().find_map(|strategy| {
            let raw = strategy.probe(node)?;
            let parsed = parse(raw);
            if parsed.is_none() {
                tracing::debug!(field = self.field, raw, "Ignoring unparseable value");
            }
            parsed
        })
    }
}

/// First direct child element named `name`, ignoring ASCII case.
pub(crate) fn child_element<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_named(*child, name))
}

/// True if `node` is an element named `name`, ignoring ASCII case.
pub(crate) fn is_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(name)
}

fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name().eq_ignore_ascii_case(name))
        .map(|attr| attr.value())
}
