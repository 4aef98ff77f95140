//! # Snapshot History
//!
//! Linear undo/redo over whole document snapshots.
//!
//! ## Design
//!
//! - Every structural edit records the complete snapshot it produced, so
//!   undo and redo are cursor moves plus a lookup, never a replay of
//!   inverse operations.
//! - Recording while the cursor sits mid-log discards everything after the
//!   cursor. There is exactly one timeline; abandoned redo branches are
//!   not kept.
//! - The log stores full snapshots rather than diffs. Memory grows with
//!   history length times tree size, which interactive sessions tolerate
//!   easily. There is no entry cap: trimming old entries would break the
//!   guarantee that undoing N edits lands exactly on the state from N
//!   edits ago.

use maquette_document::Snapshot;

/// The snapshot log plus a cursor. The active snapshot is always
/// `log[cursor]`; entries before it are the undo past, entries after it
/// are the redo future.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// A log holding only `initial`, with the cursor on it.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The snapshot the cursor points at.
    pub fn active(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Record the snapshot produced by a structural edit: drop any redo
    /// branch, append, advance the cursor onto the new entry.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor += 1;
    }

    /// Step back one entry. Returns false, changing nothing, at the start
    /// of the log.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns false, changing nothing, at the end
    /// of the log.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Throw the whole log away and start over from `snapshot`. Used when
    /// a template load replaces the document.
    pub fn reset(&mut self, snapshot: Snapshot) {
        self.snapshots = vec![snapshot];
        self.cursor = 0;
    }

    /// Number of entries in the log. At least 1; the initial state counts.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Position of the active entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maquette_document::{Node, NodeKind};

    fn snap(ids: &[&str]) -> Snapshot {
        Snapshot::from_nodes(ids.iter().enumerate().map(|(i, id)| {
            let node = Node::new(*id, NodeKind::Container);
            if i == 0 {
                node
            } else {
                node.with_parent(ids[0])
            }
        }))
    }

    #[test]
    fn test_new_log_has_single_entry() {
        let history = History::new(snap(&["root"]));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_advances_cursor() {
        let mut history = History::new(snap(&["root"]));
        history.record(snap(&["root", "a"]));
        history.record(snap(&["root", "a", "b"]));

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.active().len(), 3);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_walk_the_log() {
        let mut history = History::new(snap(&["root"]));
        history.record(snap(&["root", "a"]));

        assert!(history.undo());
        assert_eq!(history.active().len(), 1);
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.active().len(), 2);

        // Both directions saturate at the ends.
        assert!(!history.redo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_record_discards_redo_branch() {
        let mut history = History::new(snap(&["root"]));
        history.record(snap(&["root", "a"]));
        history.record(snap(&["root", "a", "b"]));
        history.undo();
        history.undo();

        history.record(snap(&["root", "c"]));

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        assert!(history.active().contains("c"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_reset_replaces_everything() {
        let mut history = History::new(snap(&["root"]));
        history.record(snap(&["root", "a"]));
        history.undo();

        history.reset(snap(&["root", "x", "y"]));

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.active().len(), 3);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
