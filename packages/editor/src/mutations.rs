//! # Tree Mutations
//!
//! The structural operations that move a document from one snapshot to the
//! next.
//!
//! ## Design
//!
//! 1. **Validate first**: every mutation is checked against the current
//!    snapshot before any copy is made, so a rejected intent leaves no
//!    trace anywhere.
//! 2. **Copy-on-write**: `apply` never touches its input. It clones the
//!    snapshot and edits the clone, which keeps recorded history entries
//!    frozen forever.
//! 3. **Atomic**: a delete removes the whole subtree in one step and a
//!    reorder renumbers the whole sibling run in one step. There is no
//!    observable intermediate state.
//!
//! ## Operation semantics
//!
//! - `InsertNode` creates a node with its kind's starter content and
//!   styles, appends it to the parent's child list and leaves it at
//!   `order = 0`. Fresh siblings therefore collate among themselves by id
//!   until an explicit reorder assigns real positions.
//! - `UpdateNode` merges a partial record over the node. The style map is
//!   replaced wholesale, not merged key by key.
//! - `DeleteNode` removes the node and every transitive descendant. The
//!   root is protected.
//! - `ReorderNode` moves a node among its siblings, clamping the target
//!   index into range, and renumbers the run densely (0, 1, 2, ...).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use maquette_document::{Node, NodeKind, Snapshot};

use crate::errors::{EditorError, EditorResult};

/// Partial update for a single node record.
///
/// Structural fields (id, kind, parent, children) are deliberately not
/// representable here. Structure only changes through insert, delete and
/// reorder, which is what keeps the tree invariants checkable in one
/// place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeUpdate {
    /// New textual content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Full replacement for the style map. Callers that want to add one
    /// declaration merge old and new before submitting, the way a
    /// property panel does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<HashMap<String, String>>,

    /// New sibling rank, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl NodeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn styles(mut self, styles: HashMap<String, String>) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}

/// A structural operation on the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Mutation {
    /// Create `node_id` under `parent_id`. A `None` parent establishes the
    /// root of an empty document. The id must not already be in use;
    /// [`Editor::insert`](crate::Editor::insert) mints one.
    InsertNode {
        node_id: String,
        kind: NodeKind,
        parent_id: Option<String>,
    },

    /// Merge `fields` over the node `node_id`.
    UpdateNode { node_id: String, fields: NodeUpdate },

    /// Remove `node_id` and every transitive descendant.
    DeleteNode { node_id: String },

    /// Move `node_id` to `new_index` among its siblings.
    ReorderNode { node_id: String, new_index: usize },
}

/// What an applied mutation asks the engine to do with the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Leave the selection as it is.
    Unchanged,
    /// Select this node.
    Select(String),
}

/// The product of a successful application: the next snapshot plus its
/// selection side effect.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub snapshot: Snapshot,
    pub selection: SelectionEffect,
}

impl Mutation {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertNode { .. } => "InsertNode",
            Mutation::UpdateNode { .. } => "UpdateNode",
            Mutation::DeleteNode { .. } => "DeleteNode",
            Mutation::ReorderNode { .. } => "ReorderNode",
        }
    }

    /// Check this mutation against `snapshot` without building anything.
    pub fn validate(&self, snapshot: &Snapshot) -> EditorResult<()> {
        match self {
            Mutation::InsertNode { parent_id, .. } => match parent_id {
                Some(parent_id) if !snapshot.contains(parent_id) => {
                    Err(EditorError::ParentNotFound(parent_id.clone()))
                }
                None if !snapshot.is_empty() => Err(EditorError::RootAlreadyExists),
                _ => Ok(()),
            },

            Mutation::UpdateNode { node_id, .. } => {
                if snapshot.contains(node_id) {
                    Ok(())
                } else {
                    Err(EditorError::NodeNotFound(node_id.clone()))
                }
            }

            Mutation::DeleteNode { node_id } => {
                let node = snapshot
                    .get(node_id)
                    .ok_or_else(|| EditorError::NodeNotFound(node_id.clone()))?;
                if node.parent.is_none() {
                    return Err(EditorError::CannotDeleteRoot);
                }
                Ok(())
            }

            Mutation::ReorderNode { node_id, .. } => {
                let node = snapshot
                    .get(node_id)
                    .ok_or_else(|| EditorError::NodeNotFound(node_id.clone()))?;
                if node.parent.is_none() {
                    // The root has no sibling run to move within; reported
                    // in the same class as a dangling reference.
                    return Err(EditorError::ParentNotFound(node_id.clone()));
                }
                Ok(())
            }
        }
    }

    /// Apply this mutation to `snapshot`, producing the next snapshot. The
    /// input snapshot is never modified.
    pub fn apply(&self, snapshot: &Snapshot) -> EditorResult<MutationOutcome> {
        self.validate(snapshot)?;

        match self {
            Mutation::InsertNode {
                node_id,
                kind,
                parent_id,
            } => Self::apply_insert(snapshot, node_id, *kind, parent_id.as_deref()),
            Mutation::UpdateNode { node_id, fields } => {
                Self::apply_update(snapshot, node_id, fields)
            }
            Mutation::DeleteNode { node_id } => Self::apply_delete(snapshot, node_id),
            Mutation::ReorderNode { node_id, new_index } => {
                Self::apply_reorder(snapshot, node_id, *new_index)
            }
        }
    }

    fn apply_insert(
        snapshot: &Snapshot,
        node_id: &str,
        kind: NodeKind,
        parent_id: Option<&str>,
    ) -> EditorResult<MutationOutcome> {
        let mut node = Node::new(node_id, kind)
            .with_content(kind.default_content())
            .with_styles(kind.default_styles());

        let mut next = snapshot.clone();
        if let Some(parent_id) = parent_id {
            node = node.with_parent(parent_id);
            if let Some(parent) = next.get_mut(parent_id) {
                parent.children.push(node_id.to_string());
            }
        }
        next.insert(node);

        Ok(MutationOutcome {
            snapshot: next,
            selection: SelectionEffect::Select(node_id.to_string()),
        })
    }

    fn apply_update(
        snapshot: &Snapshot,
        node_id: &str,
        fields: &NodeUpdate,
    ) -> EditorResult<MutationOutcome> {
        let mut next = snapshot.clone();
        if let Some(node) = next.get_mut(node_id) {
            if let Some(content) = &fields.content {
                node.content = content.clone();
            }
            if let Some(styles) = &fields.styles {
                node.styles = styles.clone();
            }
            if let Some(order) = fields.order {
                node.order = order;
            }
        }

        Ok(MutationOutcome {
            snapshot: next,
            selection: SelectionEffect::Unchanged,
        })
    }

    fn apply_delete(snapshot: &Snapshot, node_id: &str) -> EditorResult<MutationOutcome> {
        // validate() already rejected the root, so a parent id exists.
        let parent_id = snapshot
            .get(node_id)
            .and_then(|node| node.parent.clone())
            .ok_or_else(|| EditorError::NodeNotFound(node_id.to_string()))?;

        let mut next = snapshot.clone();
        if let Some(parent) = next.get_mut(&parent_id) {
            parent.children.retain(|child| child != node_id);
        }
        for descendant in snapshot.descendants(node_id) {
            next.remove(&descendant);
        }
        next.remove(node_id);

        Ok(MutationOutcome {
            snapshot: next,
            selection: SelectionEffect::Select(parent_id),
        })
    }

    fn apply_reorder(
        snapshot: &Snapshot,
        node_id: &str,
        new_index: usize,
    ) -> EditorResult<MutationOutcome> {
        let parent_id = snapshot
            .get(node_id)
            .and_then(|node| node.parent.clone())
            .ok_or_else(|| EditorError::ParentNotFound(node_id.to_string()))?;
        let parent = snapshot
            .get(&parent_id)
            .ok_or_else(|| EditorError::ParentNotFound(parent_id.clone()))?;

        let mut run = parent.children.clone();
        let position = run
            .iter()
            .position(|child| child == node_id)
            .ok_or_else(|| EditorError::NodeNotFound(node_id.to_string()))?;
        run.remove(position);
        // With the node taken out, the largest legal slot is the end of
        // the shortened run, so min() is exactly the clamp.
        let target = new_index.min(run.len());
        run.insert(target, node_id.to_string());

        let mut next = snapshot.clone();
        for (index, child_id) in run.iter().enumerate() {
            if let Some(child) = next.get_mut(child_id) {
                child.order = index as i32;
            }
        }
        if let Some(parent) = next.get_mut(&parent_id) {
            parent.children = run;
        }

        Ok(MutationOutcome {
            snapshot: next,
            selection: SelectionEffect::Unchanged,
        })
    }
}
