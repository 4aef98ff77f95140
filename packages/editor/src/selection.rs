//! Selection tracking for the editor.

use maquette_document::{Node, Snapshot};

/// The at-most-one currently selected node.
///
/// Selection is UI focus, not document content: it is never recorded in
/// history, and undo/redo leave it alone. The stored id is also never
/// validated on write, so after an undo it can point at a node the active
/// snapshot no longer has. Readers resolve it defensively and treat a
/// stale id as "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the selection. Accepts any id without checking it.
    pub fn set(&mut self, id: Option<&str>) {
        self.current = id.map(str::to_string);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The stored id, stale or not.
    pub fn id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The stored id, but only if `snapshot` still has that node.
    pub fn resolve_id(&self, snapshot: &Snapshot) -> Option<&str> {
        self.current.as_deref().filter(|id| snapshot.contains(id))
    }

    /// The selected node record, if the selection is live.
    pub fn resolve<'a>(&self, snapshot: &'a Snapshot) -> Option<&'a Node> {
        self.current.as_deref().and_then(|id| snapshot.get(id))
    }
}
