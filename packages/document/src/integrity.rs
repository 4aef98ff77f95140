//! Structural integrity checks over a snapshot.
//!
//! The mutator upholds these invariants by construction; the checker exists
//! so tests and hand-built snapshots (custom template catalogs) can prove a
//! store is sound: at most one root, mutually consistent parent/child
//! references, no dangling ids, no cycles.

use crate::snapshot::Snapshot;
use std::collections::HashSet;
use thiserror::Error;

/// One structural defect found in a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("Multiple roots: {0} and {1}")]
    MultipleRoots(String, String),

    #[error("Child id {child} listed under {parent} does not exist")]
    DanglingChild { parent: String, child: String },

    #[error("Node {parent} lists child {child} more than once")]
    DuplicateChild { parent: String, child: String },

    #[error("Parent id {parent} referenced by {node} does not exist")]
    MissingParent { node: String, parent: String },

    #[error("Node {child} points at parent {parent} but is not in its children")]
    ChildNotListed { parent: String, child: String },

    #[error("Node {child} is listed under {parent} but points elsewhere")]
    ParentNotBackReferenced { parent: String, child: String },

    #[error("Node {0} is its own ancestor")]
    CycleDetected(String),
}

/// Check every structural invariant, collecting all violations rather than
/// stopping at the first. An empty result means the store is sound.
pub fn check_integrity(snapshot: &Snapshot) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    let mut root: Option<&str> = None;
    for node in snapshot.nodes() {
        if node.parent.is_none() {
            match root {
                Some(existing) => violations.push(IntegrityViolation::MultipleRoots(
                    existing.to_string(),
                    node.id.clone(),
                )),
                None => root = Some(&node.id),
            }
        }
    }

    for node in snapshot.nodes() {
        let mut listed: HashSet<&str> = HashSet::new();
        for child_id in &node.children {
            if !listed.insert(child_id) {
                violations.push(IntegrityViolation::DuplicateChild {
                    parent: node.id.clone(),
                    child: child_id.clone(),
                });
                continue;
            }

            match snapshot.get(child_id) {
                None => violations.push(IntegrityViolation::DanglingChild {
                    parent: node.id.clone(),
                    child: child_id.clone(),
                }),
                Some(child) => {
                    if child.parent.as_deref() != Some(node.id.as_str()) {
                        violations.push(IntegrityViolation::ParentNotBackReferenced {
                            parent: node.id.clone(),
                            child: child_id.clone(),
                        });
                    }
                }
            }
        }

        if let Some(parent_id) = &node.parent {
            match snapshot.get(parent_id) {
                None => violations.push(IntegrityViolation::MissingParent {
                    node: node.id.clone(),
                    parent: parent_id.clone(),
                }),
                Some(parent) => {
                    if !parent.children.contains(&node.id) {
                        violations.push(IntegrityViolation::ChildNotListed {
                            parent: parent_id.clone(),
                            child: node.id.clone(),
                        });
                    }
                }
            }
        }

        // Acyclicity: walk parent links; hitting the start node again means
        // the node is its own ancestor. The seen set bounds the walk when
        // the cycle lies further up the chain.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = node.parent.as_deref();
        while let Some(parent_id) = current {
            if parent_id == node.id {
                violations.push(IntegrityViolation::CycleDetected(node.id.clone()));
                break;
            }
            if !seen.insert(parent_id) {
                break;
            }
            current = snapshot.get(parent_id).and_then(|n| n.parent.as_deref());
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeKind};

    #[test]
    fn test_sound_store_has_no_violations() {
        let store = Snapshot::from_nodes([
            Node::new("root", NodeKind::Container).with_children(["a"]),
            Node::new("a", NodeKind::Text).with_parent("root"),
        ]);
        assert!(check_integrity(&store).is_empty());
        assert!(check_integrity(&Snapshot::new()).is_empty());
    }

    #[test]
    fn test_detects_multiple_roots() {
        let store = Snapshot::from_nodes([
            Node::new("r1", NodeKind::Container),
            Node::new("r2", NodeKind::Container),
        ]);
        let violations = check_integrity(&store);
        assert!(matches!(
            violations.as_slice(),
            [IntegrityViolation::MultipleRoots(..)]
        ));
    }

    #[test]
    fn test_detects_dangling_child() {
        let store =
            Snapshot::from_nodes([Node::new("root", NodeKind::Container).with_children(["ghost"])]);
        assert!(check_integrity(&store)
            .iter()
            .any(|v| matches!(v, IntegrityViolation::DanglingChild { child, .. } if child == "ghost")));
    }

    #[test]
    fn test_detects_duplicate_child_entry() {
        let store = Snapshot::from_nodes([
            Node::new("root", NodeKind::Container).with_children(["a", "a"]),
            Node::new("a", NodeKind::Text).with_parent("root"),
        ]);
        assert!(check_integrity(&store)
            .iter()
            .any(|v| matches!(v, IntegrityViolation::DuplicateChild { .. })));
    }

    #[test]
    fn test_detects_one_sided_links() {
        // a points at root, but root does not list it.
        let store = Snapshot::from_nodes([
            Node::new("root", NodeKind::Container),
            Node::new("a", NodeKind::Text).with_parent("root"),
        ]);
        assert!(check_integrity(&store)
            .iter()
            .any(|v| matches!(v, IntegrityViolation::ChildNotListed { child, .. } if child == "a")));

        // root lists b, but b points elsewhere.
        let store = Snapshot::from_nodes([
            Node::new("root", NodeKind::Container).with_children(["b"]),
            Node::new("other", NodeKind::Container)
                .with_parent("root")
                .with_children(["b"]),
            Node::new("b", NodeKind::Text).with_parent("other"),
        ]);
        assert!(check_integrity(&store)
            .iter()
            .any(|v| matches!(
                v,
                IntegrityViolation::ParentNotBackReferenced { parent, .. } if parent == "root"
            )));
    }

    #[test]
    fn test_detects_cycle() {
        let store = Snapshot::from_nodes([
            Node::new("a", NodeKind::Container)
                .with_parent("b")
                .with_children(["b"]),
            Node::new("b", NodeKind::Container)
                .with_parent("a")
                .with_children(["a"]),
        ]);
        assert!(check_integrity(&store)
            .iter()
            .any(|v| matches!(v, IntegrityViolation::CycleDetected(_))));
    }
}
