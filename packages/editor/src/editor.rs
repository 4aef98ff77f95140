//! # Editor
//!
//! The engine facade. One [`Editor`] owns everything about one open
//! document: the snapshot history, the selection, the template catalog
//! and the id allocator. UI collaborators submit intents and render from
//! [`DocumentView`]; they never hold references into the tree between
//! edits.

use tracing::{debug, info, warn};

use maquette_document::{IdAllocator, Node, NodeKind, Snapshot};

use crate::errors::{EditorError, EditorResult};
use crate::history::History;
use crate::mutations::{Mutation, MutationOutcome, NodeUpdate, SelectionEffect};
use crate::selection::Selection;
use crate::templates::TemplateRegistry;

/// Document name used to seed node ids.
const DOCUMENT_NAME: &str = "untitled";

/// Read-only state for rendering one frame.
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    /// The active snapshot.
    pub document: &'a Snapshot,
    /// Live selection; `None` when nothing is selected or the stored id
    /// went stale.
    pub selected_id: Option<&'a str>,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Template the document was last loaded from, if any.
    pub active_template: Option<&'a str>,
}

/// The document engine. All state is owned; two editors share nothing and
/// a single editor is driven from one thread.
#[derive(Debug, Clone)]
pub struct Editor {
    history: History,
    selection: Selection,
    registry: TemplateRegistry,
    ids: IdAllocator,
    active_template: Option<String>,
}

impl Editor {
    /// An editor over an empty document with the built-in template
    /// catalog.
    pub fn new() -> Self {
        Self::with_registry(TemplateRegistry::builtin())
    }

    /// An editor with a caller-supplied catalog.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self {
            history: History::new(Snapshot::new()),
            selection: Selection::new(),
            registry,
            ids: IdAllocator::new(DOCUMENT_NAME),
            active_template: None,
        }
    }

    /// Create a node of `kind` under `parent_id` and select it. Passing
    /// `None` establishes the root of an empty document. Returns the
    /// minted id.
    pub fn insert(&mut self, kind: NodeKind, parent_id: Option<&str>) -> EditorResult<String> {
        let node_id = self.ids.allocate();
        self.apply(Mutation::InsertNode {
            node_id: node_id.clone(),
            kind,
            parent_id: parent_id.map(str::to_string),
        })?;
        Ok(node_id)
    }

    /// Merge `fields` over the node `node_id`.
    pub fn update(&mut self, node_id: &str, fields: NodeUpdate) -> EditorResult<()> {
        self.apply(Mutation::UpdateNode {
            node_id: node_id.to_string(),
            fields,
        })
    }

    /// Remove `node_id` and its whole subtree, then select the former
    /// parent.
    pub fn delete(&mut self, node_id: &str) -> EditorResult<()> {
        self.apply(Mutation::DeleteNode {
            node_id: node_id.to_string(),
        })
    }

    /// Move `node_id` to `new_index` among its siblings (clamped into
    /// range) and renumber the run densely.
    pub fn reorder(&mut self, node_id: &str, new_index: usize) -> EditorResult<()> {
        self.apply(Mutation::ReorderNode {
            node_id: node_id.to_string(),
            new_index,
        })
    }

    /// Set or clear the selection. Not validated, not recorded in
    /// history; selecting a node that does not exist is tolerated and
    /// simply resolves to nothing.
    pub fn select(&mut self, id: Option<&str>) {
        debug!("select {:?}", id);
        self.selection.set(id);
    }

    /// Step the document back one snapshot. Selection is left alone.
    /// Returns false, changing nothing, when there is no undo past.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            debug!(
                "undo -> entry {} of {}",
                self.history.cursor(),
                self.history.len()
            );
        }
        moved
    }

    /// Step the document forward one snapshot. Returns false, changing
    /// nothing, when there is no redo future.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            debug!(
                "redo -> entry {} of {}",
                self.history.cursor(),
                self.history.len()
            );
        }
        moved
    }

    /// Replace the document with the starter tree of `template_id`.
    /// History restarts from that single snapshot and the selection is
    /// cleared; there is no undoing back across a template load.
    pub fn load_template(&mut self, template_id: &str) -> EditorResult<()> {
        let template = self
            .registry
            .get(template_id)
            .ok_or_else(|| EditorError::TemplateNotFound(template_id.to_string()))?;
        let snapshot = template.snapshot().clone();
        info!("load template '{}' ({} nodes)", template_id, snapshot.len());

        self.history.reset(snapshot);
        self.selection.clear();
        self.active_template = Some(template_id.to_string());
        Ok(())
    }

    /// The active snapshot.
    pub fn document(&self) -> &Snapshot {
        self.history.active()
    }

    /// Live selected id. A stale selection reads as `None`.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.resolve_id(self.history.active())
    }

    /// Live selected node record.
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.resolve(self.history.active())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn active_template(&self) -> Option<&str> {
        self.active_template.as_deref()
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Number of snapshots in the history log.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Position of the active snapshot within the log.
    pub fn history_cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Everything the UI needs to render one frame.
    pub fn view(&self) -> DocumentView<'_> {
        DocumentView {
            document: self.document(),
            selected_id: self.selected_id(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            active_template: self.active_template(),
        }
    }

    /// Funnel for structural edits: apply the mutation to the active
    /// snapshot, record the result, then run the selection side effect.
    /// On failure nothing is recorded and nothing is selected.
    fn apply(&mut self, mutation: Mutation) -> EditorResult<()> {
        let outcome = match mutation.apply(self.history.active()) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("{} rejected: {}", mutation.name(), err);
                return Err(err);
            }
        };

        let MutationOutcome {
            snapshot,
            selection,
        } = outcome;
        debug!("{} applied, {} nodes", mutation.name(), snapshot.len());

        self.history.record(snapshot);
        match selection {
            SelectionEffect::Unchanged => {}
            SelectionEffect::Select(id) => self.selection.set(Some(&id)),
        }
        Ok(())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
