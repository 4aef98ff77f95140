use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The whole node store at one instant.
///
/// A snapshot is a plain value compared by content: operations that change
/// the document clone the active snapshot and edit the clone, so entries
/// held by the history are never touched again. Serializes as the flat
/// id → node map the builder UI consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    nodes: HashMap<String, Node>,
}

impl Snapshot {
    /// An empty store (no root yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from complete node records. Used for templates and
    /// tests; the records are keyed by their own ids.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            nodes: nodes.into_iter().map(|node| (node.id.clone(), node)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert or replace a node record, keyed by its id.
    pub fn insert(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn remove(&mut self, id: &str) -> Option<Node> {
        self.nodes.remove(id)
    }

    /// The root node: the single node without a parent back-reference.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.values().find(|node| node.parent.is_none())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Direct children of `parent_id` in render order: `order` ascending,
    /// ties broken by id so the sequence is total. Ids without a record are
    /// skipped (an intact store has none).
    pub fn sorted_children(&self, parent_id: &str) -> Vec<&Node> {
        let parent = match self.get(parent_id) {
            Some(parent) => parent,
            None => return Vec::new(),
        };

        let mut children: Vec<&Node> = parent
            .children
            .iter()
            .filter_map(|id| self.get(id))
            .collect();
        children.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        children
    }

    /// Ids of every transitive descendant of `id`, not including `id`
    /// itself. Order is unspecified; callers treat the result as a set.
    pub fn descendants(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<&str> = match self.get(id) {
            Some(node) => node.children.iter().map(String::as_str).collect(),
            None => return out,
        };

        while let Some(current) = stack.pop() {
            out.push(current.to_string());
            if let Some(node) = self.get(current) {
                stack.extend(node.children.iter().map(String::as_str));
            }
        }

        out
    }
}
