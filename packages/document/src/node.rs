use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of kinds a document node can have.
///
/// Rendering and behavior dispatch on this tag exhaustively; there is no
/// open-ended subclassing. Serialized lowercase to match the builder UI's
/// wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Text,
    Image,
    Button,
    Container,
    Form,
}

impl NodeKind {
    /// Content a freshly created node of this kind starts with.
    ///
    /// The payload's meaning depends on the kind: literal text for `Text`,
    /// an image URI for `Image`, a label for `Button`. Structural kinds
    /// (`Container`, `Form`) carry no content.
    pub fn default_content(&self) -> &'static str {
        match self {
            NodeKind::Text => "Edit this text",
            NodeKind::Image => "https://via.placeholder.com/300x200",
            NodeKind::Button => "Button",
            NodeKind::Container | NodeKind::Form => "",
        }
    }

    /// Style properties a freshly created node of this kind starts with.
    ///
    /// Applied only at creation time; afterwards styles are opaque data the
    /// engine passes through unmodified.
    pub fn default_styles(&self) -> HashMap<String, String> {
        let entries: &[(&str, &str)] = match self {
            NodeKind::Text => &[
                ("fontSize", "16px"),
                ("color", "#333"),
                ("padding", "10px"),
            ],
            NodeKind::Image => &[("width", "100%"), ("height", "auto")],
            NodeKind::Button => &[
                ("backgroundColor", "#3B82F6"),
                ("color", "white"),
                ("padding", "10px 20px"),
                ("borderRadius", "4px"),
                ("cursor", "pointer"),
                ("display", "inline-block"),
            ],
            NodeKind::Container => &[
                ("padding", "20px"),
                ("backgroundColor", "#F9FAFB"),
                ("borderRadius", "8px"),
                ("minHeight", "100px"),
            ],
            NodeKind::Form => &[
                ("padding", "20px"),
                ("backgroundColor", "#F9FAFB"),
                ("borderRadius", "8px"),
                ("display", "flex"),
                ("flexDirection", "column"),
                ("gap", "10px"),
            ],
        };

        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// One element of the document tree.
///
/// Nodes live in a flat id-keyed store and are wired into a tree through
/// `parent`/`children` references, never owning pointers. `children` is the
/// authoritative membership of the subtree, but the sibling sequence shown
/// to users is derived from each child's `order` (ascending, ties broken by
/// id), not from the vector position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Opaque payload; meaning depends on `kind`.
    pub content: String,

    /// Free-form style properties, passed through to renderers unmodified.
    pub styles: HashMap<String, String>,

    /// Back-reference to the parent. Exactly one node per non-empty
    /// document, the root, has no parent.
    #[serde(rename = "parentId")]
    pub parent: Option<String>,

    /// Ids of direct children.
    pub children: Vec<String>,

    /// Rank among siblings. Gaps and duplicates are legal; render order
    /// sorts ascending with id as the tie-break.
    pub order: i32,
}

impl Node {
    /// A bare node: empty content/styles, no parent, no children, order 0.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: String::new(),
            styles: HashMap::new(),
            parent: None,
            children: Vec::new(),
            order: 0,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Replace the whole style map.
    pub fn with_styles(mut self, styles: HashMap<String, String>) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults() {
        assert_eq!(NodeKind::Text.default_content(), "Edit this text");
        assert_eq!(NodeKind::Button.default_content(), "Button");
        assert_eq!(NodeKind::Container.default_content(), "");

        let text_styles = NodeKind::Text.default_styles();
        assert_eq!(text_styles.get("fontSize").map(String::as_str), Some("16px"));

        let button_styles = NodeKind::Button.default_styles();
        assert_eq!(
            button_styles.get("backgroundColor").map(String::as_str),
            Some("#3B82F6")
        );

        // Structural kinds still come with chrome.
        assert_eq!(
            NodeKind::Form.default_styles().get("flexDirection").map(String::as_str),
            Some("column")
        );
    }

    #[test]
    fn test_builder_chain() {
        let node = Node::new("hero-button", NodeKind::Button)
            .with_parent("hero")
            .with_order(2)
            .with_content("Get Started")
            .with_style("cursor", "pointer");

        assert_eq!(node.id, "hero-button");
        assert_eq!(node.kind, NodeKind::Button);
        assert_eq!(node.parent.as_deref(), Some("hero"));
        assert_eq!(node.order, 2);
        assert_eq!(node.content, "Get Started");
        assert_eq!(node.styles.get("cursor").map(String::as_str), Some("pointer"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let node = Node::new("t1", NodeKind::Text)
            .with_parent("root")
            .with_content("Hi");

        let json: serde_json::Value = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["parentId"], "root");
        assert_eq!(json["content"], "Hi");

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
